// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! AST and foundation types for dynaml model equations.
//!
//! This crate contains the expression AST the parser produces, the type
//! system values attached to it during analysis, and source-location
//! tracking for diagnostics.

pub mod ast;
pub mod error;
pub mod foundation;

pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use error::{CompileError, ErrorKind, Severity, TypeResult};
pub use foundation::{SourceFile, SourceMap, Span, Type};
