//! Multiplicative physical units.
//!
//! A [`Unit`] pairs a [`Dimension`] with a scale factor relative to the SI
//! coherent unit for that dimension. Millivolts and volts share a dimension
//! but differ in scale; the scale rides along through the algebra so that
//! derived quantities keep their magnitude.
//!
//! Every unit in dynaml is multiplicative. Model equations describe rates,
//! potentials, conductances and concentrations, all of which compose by
//! multiplication and division; there is no affine temperature arithmetic
//! in the language.

use crate::dimension::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical unit: SI dimension exponents plus a scale factor.
///
/// The scale is the multiplicative factor relative to the SI coherent unit
/// (1.0 for volts, 1e-3 for millivolts, 1e-12 for picoamperes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    dims: Dimension,
    scale: f64,
}

impl Unit {
    /// Dimensionless unit constant.
    pub const DIMENSIONLESS: Unit = Unit {
        dims: Dimension::DIMENSIONLESS,
        scale: 1.0,
    };

    /// Create a unit from dimensions and a scale factor.
    pub const fn new(dims: Dimension, scale: f64) -> Self {
        Self { dims, scale }
    }

    /// Get the dimensional exponents.
    pub const fn dims(&self) -> &Dimension {
        &self.dims
    }

    /// Get the scale factor relative to the SI coherent unit.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Check if this unit is dimensionless.
    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_dimensionless()
    }

    // ------------------------------------------------------------------
    // SI base units
    // ------------------------------------------------------------------

    /// Meter (m) - length
    pub const fn meters() -> Self {
        Self::new(Dimension::METER, 1.0)
    }

    /// Kilogram (kg) - mass
    pub const fn kilograms() -> Self {
        Self::new(Dimension::KILOGRAM, 1.0)
    }

    /// Second (s) - time
    pub const fn seconds() -> Self {
        Self::new(Dimension::SECOND, 1.0)
    }

    /// Ampere (A) - electric current
    pub const fn amperes() -> Self {
        Self::new(Dimension::AMPERE, 1.0)
    }

    /// Kelvin (K) - temperature
    pub const fn kelvin() -> Self {
        Self::new(Dimension::KELVIN, 1.0)
    }

    /// Mole (mol) - amount of substance
    pub const fn moles() -> Self {
        Self::new(Dimension::MOLE, 1.0)
    }

    /// Candela (cd) - luminous intensity
    pub const fn candelas() -> Self {
        Self::new(Dimension::CANDELA, 1.0)
    }

    /// Gram (g) - mass
    /// The SI base is the kilogram; gram exists so milligram and kilogram
    /// both fall out of prefix resolution.
    pub const fn grams() -> Self {
        Self::new(Dimension::KILOGRAM, 0.001)
    }

    // ------------------------------------------------------------------
    // Derived units used throughout model equations
    // ------------------------------------------------------------------

    /// Hertz (Hz) - frequency: s^-1
    pub const fn hertz() -> Self {
        Self::new(
            Dimension {
                length: 0,
                mass: 0,
                time: -1,
                current: 0,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Newton (N) - force: kg*m/s^2
    pub const fn newtons() -> Self {
        Self::new(
            Dimension {
                length: 1,
                mass: 1,
                time: -2,
                current: 0,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Volt (V) - electric potential: kg*m^2/(s^3*A)
    pub const fn volts() -> Self {
        Self::new(
            Dimension {
                length: 2,
                mass: 1,
                time: -3,
                current: -1,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Ohm (Ω) - resistance: kg*m^2/(s^3*A^2)
    pub const fn ohms() -> Self {
        Self::new(
            Dimension {
                length: 2,
                mass: 1,
                time: -3,
                current: -2,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Siemens (S) - conductance: inverse ohm
    pub const fn siemens() -> Self {
        Self::new(
            Dimension {
                length: -2,
                mass: -1,
                time: 3,
                current: 2,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Farad (F) - capacitance: s^4*A^2/(kg*m^2)
    pub const fn farads() -> Self {
        Self::new(
            Dimension {
                length: -2,
                mass: -1,
                time: 4,
                current: 2,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Coulomb (C) - charge: s*A
    pub const fn coulombs() -> Self {
        Self::new(
            Dimension {
                length: 0,
                mass: 0,
                time: 1,
                current: 1,
                temperature: 0,
                amount: 0,
                luminosity: 0,
            },
            1.0,
        )
    }

    /// Molar (M) - concentration: mol/m^3, scaled to mol/L
    pub const fn molar() -> Self {
        Self::new(
            Dimension {
                length: -3,
                mass: 0,
                time: 0,
                current: 0,
                temperature: 0,
                amount: 1,
                luminosity: 0,
            },
            1000.0,
        )
    }

    // ------------------------------------------------------------------
    // Unit algebra
    // ------------------------------------------------------------------

    /// Multiply two units (dimensions add, scales multiply).
    pub fn multiply(&self, other: &Unit) -> Unit {
        Unit::new(self.dims.multiply(&other.dims), self.scale * other.scale)
    }

    /// Divide two units (dimensions subtract, scales divide).
    pub fn divide(&self, other: &Unit) -> Unit {
        Unit::new(self.dims.divide(&other.dims), self.scale / other.scale)
    }

    /// Raise a unit to an integer power.
    ///
    /// Dimension exponents saturate at the `i8` bounds; the scale exponent
    /// is clamped to the same window before `powi` so both degrade together.
    pub fn pow(&self, exponent: i64) -> Unit {
        let clamped = exponent.clamp(i8::MIN as i64, i8::MAX as i64) as i32;
        Unit::new(self.dims.pow(clamped), self.scale.powi(clamped))
    }

    /// Multiplicative inverse (1/unit).
    pub fn inverse(&self) -> Unit {
        self.pow(-1)
    }

    /// Check dimensional compatibility (same dimensions, any scale).
    pub fn is_comparable(&self, other: &Unit) -> bool {
        self.dims == other.dims
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 1.0 {
            write!(f, "{}", self.dims)
        } else {
            write!(f, "{}*{}", self.scale, self.dims)
        }
    }
}
