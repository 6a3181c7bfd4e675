//! Untyped expression AST with per-node type-result slots.
//!
//! The parser produces plain syntactic structure plus source locations.
//! Semantic analysis walks the tree bottom-up and fills each node's
//! type-result slot exactly once: either the inferred [`Type`] or the
//! [`CompileError`](crate::error::CompileError) that prevented one. The
//! slot is the only mutation analysis performs on the tree.
//!
//! # Compilation flow
//!
//! ```text
//! Parser → Expr (slots empty)
//!    ↓
//! Type analysis → Expr (slots filled, children before parents)
//! ```

use crate::error::TypeResult;
use crate::foundation::Span;

/// A node in the expression tree.
///
/// Binary and unary nodes own their children exclusively; sharing a subtree
/// between parents would break the write-once slot contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Expression shape
    pub kind: ExprKind,
    /// Source location for diagnostics
    pub span: Span,
    /// Type-result slot, written once per analysis run
    ty: Option<TypeResult>,
}

/// Expression shapes.
///
/// The constant evaluator matches these exhaustively; adding a variant
/// forces a decision about its constant-folding behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Integer literal (`2`)
    IntLiteral(i64),
    /// Floating-point literal (`2.5`)
    FloatLiteral(f64),
    /// Boolean literal (`true`)
    BoolLiteral(bool),
    /// String literal (`"soma"`)
    StringLiteral(String),
    /// Reference to a declared variable or parameter
    Variable(String),
    /// Parenthesised sub-expression, semantically transparent
    Group(Box<Expr>),
    /// Unary operator application
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operator application
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function call (`exp(x)`)
    Call { name: String, args: Vec<Expr> },
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// Exponentiation, right-associative
    Pow,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Arithmetic negation (`-x`)
    Neg,
    /// Logical negation (`not x`)
    Not,
}

impl Expr {
    /// Create an expression with an empty type-result slot.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            kind,
            span,
            ty: None,
        }
    }

    /// Integer literal.
    pub fn int(value: i64, span: Span) -> Self {
        Self::new(ExprKind::IntLiteral(value), span)
    }

    /// Floating-point literal.
    pub fn float(value: f64, span: Span) -> Self {
        Self::new(ExprKind::FloatLiteral(value), span)
    }

    /// Variable reference.
    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Self::new(ExprKind::Variable(name.into()), span)
    }

    /// Parenthesised group around an inner expression.
    pub fn group(inner: Expr, span: Span) -> Self {
        Self::new(ExprKind::Group(Box::new(inner)), span)
    }

    /// Unary operator applied to an operand.
    pub fn unary(op: UnaryOp, operand: Expr, span: Span) -> Self {
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        )
    }

    /// Binary operator applied to two operands.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr, span: Span) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    /// The node's type result, if analysis has reached it.
    pub fn type_result(&self) -> Option<&TypeResult> {
        self.ty.as_ref()
    }

    /// Record the node's type result.
    ///
    /// The slot is write-once per analysis run; a second write is a bug in
    /// the driver's visit order.
    pub fn set_type_result(&mut self, result: TypeResult) {
        assert!(
            self.ty.is_none(),
            "type result already set for expression at {:?}",
            self.span
        );
        self.ty = Some(result);
    }
}
