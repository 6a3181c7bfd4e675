//! AST node definitions.

pub mod expr;

pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
