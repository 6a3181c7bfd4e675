//! Compile-time reduction of exponent expressions.
//!
//! Unit powers must be known during analysis, so the exponent of a
//! unit-typed base is folded here. Only the shapes that can spell an
//! integer constant are understood: integer literals, parenthesised
//! groups, and unary minus. Everything else fails; this is deliberately
//! not a general constant folder.

use super::helpers::{err_invalid_exponent_literal, err_non_constant_exponent};
use crate::error::CompileError;
use dynaml_ast::{Expr, ExprKind, UnaryOp};

/// Reduce an exponent expression to an integer constant.
///
/// Pure and recursive; no node is mutated. Either the whole expression
/// reduces to one integer or the reduction fails at the first shape it
/// cannot fold; there is no partial result.
///
/// # Errors
///
/// - [`InvalidExponentLiteral`](crate::error::ErrorKind::InvalidExponentLiteral)
///   for a numeric literal that is not an integer, at the literal's span.
/// - [`NonConstantExponent`](crate::error::ErrorKind::NonConstantExponent)
///   for any shape outside the folded subset, at that expression's span.
pub fn evaluate_constant_exponent(expr: &Expr) -> Result<i64, CompileError> {
    match &expr.kind {
        // Parentheses are transparent
        ExprKind::Group(inner) => evaluate_constant_exponent(inner),

        ExprKind::IntLiteral(value) => Ok(*value),

        ExprKind::FloatLiteral(_) => Err(err_invalid_exponent_literal(expr.span)),

        // Negative exponents are written as unary minus; inner errors pass
        // through unchanged
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand,
        } => evaluate_constant_exponent(operand).map(|value| -value),

        // Identifiers, calls, other operators: not a constant
        _ => Err(err_non_constant_exponent(expr.span)),
    }
}
