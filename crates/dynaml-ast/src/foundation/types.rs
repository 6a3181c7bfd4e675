//! The dynaml type system.
//!
//! Types classify expression values during semantic analysis:
//!
//! - **Integer**: exact whole numbers (spike counts, exponents)
//! - **Real**: floating-point quantities without a unit
//! - **Unit**: physical quantities carrying a [`Unit`]
//! - **Boolean** / **String**: non-numeric values
//! - **Void**: statements and effectful constructs
//!
//! The numeric tower widens Integer toward Real; unit-typed values are
//! numeric but never widen implicitly, since their dimension is part of
//! the type.

use dynaml_units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type in the dynaml type system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// Exact integer
    Integer,
    /// Floating-point number without physical dimension
    Real,
    /// Physical quantity with dimension and scale
    Unit(Unit),
    /// Truth value
    Boolean,
    /// Text value
    String,
    /// No value (statement position)
    Void,
}

impl Type {
    /// Check if this type participates in numeric arithmetic.
    ///
    /// Unit-typed quantities are numeric: they add, scale and exponentiate,
    /// subject to dimensional rules.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Integer | Type::Real | Type::Unit(_))
    }

    /// Check if this is the exact integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer)
    }

    /// Check if this is the real type.
    pub fn is_real(&self) -> bool {
        matches!(self, Type::Real)
    }

    /// Check if this is a unit type.
    pub fn is_unit(&self) -> bool {
        matches!(self, Type::Unit(_))
    }

    /// The underlying unit, if this is a unit type.
    pub fn unit(&self) -> Option<&Unit> {
        match self {
            Type::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer => write!(f, "integer"),
            Type::Real => write!(f, "real"),
            Type::Unit(unit) => write!(f, "{}", unit),
            Type::Boolean => write!(f, "boolean"),
            Type::String => write!(f, "string"),
            Type::Void => write!(f, "void"),
        }
    }
}
