// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Semantic analysis for dynaml model equations.
//!
//! This crate performs expression type inference over the untyped AST.
//! The driver walks each expression tree bottom-up and dispatches to the
//! operator-specific rules; this crate currently carries the power-operator
//! rule and its supporting constant evaluator.

pub mod diagnostics;
pub mod error;
pub mod resolve;

pub use diagnostics::Diagnostics;
pub use resolve::*;
