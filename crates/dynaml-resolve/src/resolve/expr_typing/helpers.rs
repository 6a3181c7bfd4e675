//! Diagnostic constructors for expression typing.
//!
//! One constructor per failure mode, so every site that detects a given
//! problem produces the same wording tied to its source location.

use crate::error::{CompileError, ErrorKind};
use dynaml_ast::foundation::{Span, Type};

/// Unit base raised to an exponent whose type is not integer.
///
/// A unit power must be computable during analysis; a real-typed exponent
/// would make the resulting dimension undecidable.
pub fn err_invalid_unit_exponent(span: Span, exponent: &Type) -> CompileError {
    CompileError::new(
        ErrorKind::InvalidUnitExponent,
        span,
        format!(
            "unit base requires a constant integer exponent, found {}",
            exponent
        ),
    )
}

/// Exponent expression has a shape the constant evaluator cannot reduce.
pub fn err_non_constant_exponent(span: Span) -> CompileError {
    CompileError::new(
        ErrorKind::NonConstantExponent,
        span,
        "exponent cannot be reduced to an integer constant at compile time".to_string(),
    )
}

/// Exponent literal exists but is not an integer.
pub fn err_invalid_exponent_literal(span: Span) -> CompileError {
    CompileError::new(
        ErrorKind::InvalidExponentLiteral,
        span,
        "exponent of a unit quantity must be an integer literal".to_string(),
    )
}

/// Operand combination matched no inference rule.
pub fn err_unsupported_operand(span: Span, base: &Type, exponent: &Type) -> CompileError {
    CompileError::new(
        ErrorKind::UnsupportedOperand,
        span,
        format!(
            "operator '**' is not defined for operands of type {} and {}",
            base, exponent
        ),
    )
}
