//! Dimensional analysis for dynaml model equations.
//!
//! This crate provides the unit algebra the type checker relies on:
//! SI dimension vectors, multiplicative units with scale factors, and a
//! symbol table for resolving unit names (including SI prefixes).

pub mod dimension;
pub mod symbols;
pub mod unit;

pub use dimension::Dimension;
pub use symbols::{resolve_symbol, UnitError};
pub use unit::Unit;
