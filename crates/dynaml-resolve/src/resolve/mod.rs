//! Analysis passes over the expression AST.

pub mod expr_typing;
pub mod types;

pub use expr_typing::{evaluate_constant_exponent, infer_power};
pub use types::TypeRegistry;
