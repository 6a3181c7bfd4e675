//! Compile-time diagnostics as values.
//!
//! Analysis never throws: every failure is a [`CompileError`] stored in the
//! same result slot a successful type would occupy, so the first error at a
//! node short-circuits everything above it unchanged.
//!
//! The error type lives in this crate because expression nodes carry a
//! [`TypeResult`] slot directly.

use crate::foundation::Span;
use std::fmt;

/// Result of typing one expression node: a type, or the diagnostic that
/// prevented one.
pub type TypeResult = Result<crate::foundation::Type, CompileError>;

/// A single compile diagnostic with source location and message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    /// Category of this diagnostic
    pub kind: ErrorKind,
    /// Severity level
    pub severity: Severity,
    /// Primary source location
    pub span: Span,
    /// Human-readable message
    pub message: String,
    /// Additional hints
    pub notes: Vec<String>,
}

/// Category of compile diagnostic.
///
/// # Invariant
///
/// Discriminants index into the `ERROR_KIND_NAMES` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// Syntax error surfaced by the parser
    Syntax = 0,
    /// Undefined symbol
    UndefinedName = 1,
    /// Operand types don't fit the operator
    TypeMismatch = 2,
    /// Unit symbol could not be resolved
    UnknownUnit = 3,
    /// Dimensions of operands disagree
    UnitMismatch = 4,
    /// Unit base raised to a non-integer-typed exponent
    InvalidUnitExponent = 5,
    /// Exponent expression is not a compile-time constant
    NonConstantExponent = 6,
    /// Exponent literal exists but is not an integer
    InvalidExponentLiteral = 7,
    /// Operand combination matched no inference rule
    UnsupportedOperand = 8,
    /// Bug in the analyzer
    Internal = 9,
}

/// Human-readable names for error kinds.
///
/// Index matches the ErrorKind discriminant.
const ERROR_KIND_NAMES: &[&str] = &[
    "syntax error",             // 0: Syntax
    "undefined name",           // 1: UndefinedName
    "type mismatch",            // 2: TypeMismatch
    "unknown unit",             // 3: UnknownUnit
    "unit mismatch",            // 4: UnitMismatch
    "invalid unit exponent",    // 5: InvalidUnitExponent
    "non-constant exponent",    // 6: NonConstantExponent
    "invalid exponent literal", // 7: InvalidExponentLiteral
    "unsupported operand",      // 8: UnsupportedOperand
    "internal analyzer error",  // 9: Internal
];

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational note
    Note,
    /// Suspicious but valid
    Warning,
    /// Analysis cannot produce a type
    Error,
}

impl CompileError {
    /// Create an error-severity diagnostic.
    pub fn new(kind: ErrorKind, span: Span, message: String) -> Self {
        Self::with_severity(kind, Severity::Error, span, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(kind: ErrorKind, span: Span, message: String) -> Self {
        Self::with_severity(kind, Severity::Warning, span, message)
    }

    fn with_severity(kind: ErrorKind, severity: Severity, span: Span, message: String) -> Self {
        Self {
            kind,
            severity,
            span,
            message,
            notes: Vec::new(),
        }
    }

    /// Attach a hint (builder style).
    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }
}

impl ErrorKind {
    /// Human-readable name of this kind.
    pub fn name(self) -> &'static str {
        ERROR_KIND_NAMES[self as usize]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.kind.name(), self.message)
    }
}

impl std::error::Error for CompileError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_span() -> Span {
        Span::new(0, 0, 5, 1)
    }

    #[test]
    fn test_error_creation() {
        let err = CompileError::new(
            ErrorKind::NonConstantExponent,
            dummy_span(),
            "exponent is not a constant".to_string(),
        );
        assert_eq!(err.kind, ErrorKind::NonConstantExponent);
        assert_eq!(err.severity, Severity::Error);
        assert!(err.notes.is_empty());
    }

    #[test]
    fn test_warning_severity() {
        let warn = CompileError::warning(
            ErrorKind::TypeMismatch,
            dummy_span(),
            "suspicious cast".to_string(),
        );
        assert_eq!(warn.severity, Severity::Warning);
    }

    #[test]
    fn test_with_note() {
        let err = CompileError::new(ErrorKind::TypeMismatch, dummy_span(), "bad".to_string())
            .with_note("try an integer literal".to_string());
        assert_eq!(err.notes.len(), 1);
    }

    #[test]
    fn test_all_kinds_named() {
        let kinds = [
            ErrorKind::Syntax,
            ErrorKind::UndefinedName,
            ErrorKind::TypeMismatch,
            ErrorKind::UnknownUnit,
            ErrorKind::UnitMismatch,
            ErrorKind::InvalidUnitExponent,
            ErrorKind::NonConstantExponent,
            ErrorKind::InvalidExponentLiteral,
            ErrorKind::UnsupportedOperand,
            ErrorKind::Internal,
        ];
        for kind in kinds {
            assert!(!kind.name().is_empty());
        }
    }

    #[test]
    fn test_display() {
        let err = CompileError::new(
            ErrorKind::InvalidUnitExponent,
            dummy_span(),
            "unit base requires a constant integer exponent".to_string(),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("error"));
        assert!(rendered.contains("invalid unit exponent"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Note < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
