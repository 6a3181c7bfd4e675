//! SI base dimension exponents.
//!
//! A [`Dimension`] records the power of each SI base dimension carried by a
//! physical quantity. Arithmetic on dimensions mirrors arithmetic on the
//! quantities themselves: multiplying quantities adds exponents, dividing
//! subtracts them, and raising to a power scales them.
//!
//! Exponents are stored as `i8` and saturate at the `i8` bounds rather than
//! overflowing; an equation whose dimensions approach `m^127` is already
//! outside anything physically meaningful.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SI base dimensional exponents.
///
/// Each field is the power of the corresponding SI base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// Length (L) - meter
    pub length: i8,
    /// Mass (M) - kilogram
    pub mass: i8,
    /// Time (T) - second
    pub time: i8,
    /// Electric current (I) - ampere
    pub current: i8,
    /// Thermodynamic temperature (Θ) - kelvin
    pub temperature: i8,
    /// Amount of substance (N) - mole
    pub amount: i8,
    /// Luminous intensity (J) - candela
    pub luminosity: i8,
}

impl Dimension {
    /// Dimensionless constant (all exponents zero).
    pub const DIMENSIONLESS: Dimension = Dimension {
        length: 0,
        mass: 0,
        time: 0,
        current: 0,
        temperature: 0,
        amount: 0,
        luminosity: 0,
    };

    /// Meter dimension (length = 1)
    pub const METER: Dimension = Dimension {
        length: 1,
        ..Self::DIMENSIONLESS
    };

    /// Kilogram dimension (mass = 1)
    pub const KILOGRAM: Dimension = Dimension {
        mass: 1,
        ..Self::DIMENSIONLESS
    };

    /// Second dimension (time = 1)
    pub const SECOND: Dimension = Dimension {
        time: 1,
        ..Self::DIMENSIONLESS
    };

    /// Ampere dimension (current = 1)
    pub const AMPERE: Dimension = Dimension {
        current: 1,
        ..Self::DIMENSIONLESS
    };

    /// Kelvin dimension (temperature = 1)
    pub const KELVIN: Dimension = Dimension {
        temperature: 1,
        ..Self::DIMENSIONLESS
    };

    /// Mole dimension (amount = 1)
    pub const MOLE: Dimension = Dimension {
        amount: 1,
        ..Self::DIMENSIONLESS
    };

    /// Candela dimension (luminosity = 1)
    pub const CANDELA: Dimension = Dimension {
        luminosity: 1,
        ..Self::DIMENSIONLESS
    };

    /// Check if all exponents are zero.
    pub fn is_dimensionless(&self) -> bool {
        self.length == 0
            && self.mass == 0
            && self.time == 0
            && self.current == 0
            && self.temperature == 0
            && self.amount == 0
            && self.luminosity == 0
    }

    /// Combine dimensions of a product (exponents add).
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        Dimension {
            length: self.length.saturating_add(other.length),
            mass: self.mass.saturating_add(other.mass),
            time: self.time.saturating_add(other.time),
            current: self.current.saturating_add(other.current),
            temperature: self.temperature.saturating_add(other.temperature),
            amount: self.amount.saturating_add(other.amount),
            luminosity: self.luminosity.saturating_add(other.luminosity),
        }
    }

    /// Combine dimensions of a quotient (exponents subtract).
    pub fn divide(&self, other: &Dimension) -> Dimension {
        Dimension {
            length: self.length.saturating_sub(other.length),
            mass: self.mass.saturating_sub(other.mass),
            time: self.time.saturating_sub(other.time),
            current: self.current.saturating_sub(other.current),
            temperature: self.temperature.saturating_sub(other.temperature),
            amount: self.amount.saturating_sub(other.amount),
            luminosity: self.luminosity.saturating_sub(other.luminosity),
        }
    }

    /// Raise dimensions to an integer power (exponents scale).
    ///
    /// Exponents saturate at the `i8` bounds; the clamp is applied after
    /// widening so `i8::MIN * -1` lands on `i8::MAX` instead of wrapping.
    pub fn pow(&self, exponent: i32) -> Dimension {
        let scale = |e: i8| (e as i32 * exponent).clamp(i8::MIN as i32, i8::MAX as i32) as i8;
        Dimension {
            length: scale(self.length),
            mass: scale(self.mass),
            time: scale(self.time),
            current: scale(self.current),
            temperature: scale(self.temperature),
            amount: scale(self.amount),
            luminosity: scale(self.luminosity),
        }
    }
}

/// Format a single base symbol with its exponent (`s`, `s^-1`, `m^2`).
fn format_exponent(symbol: &str, exponent: i8) -> String {
    if exponent == 1 {
        symbol.to_string()
    } else {
        format!("{}^{}", symbol, exponent)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut parts = Vec::new();
        if self.length != 0 {
            parts.push(format_exponent("m", self.length));
        }
        if self.mass != 0 {
            parts.push(format_exponent("kg", self.mass));
        }
        if self.time != 0 {
            parts.push(format_exponent("s", self.time));
        }
        if self.current != 0 {
            parts.push(format_exponent("A", self.current));
        }
        if self.temperature != 0 {
            parts.push(format_exponent("K", self.temperature));
        }
        if self.amount != 0 {
            parts.push(format_exponent("mol", self.amount));
        }
        if self.luminosity != 0 {
            parts.push(format_exponent("cd", self.luminosity));
        }

        write!(f, "{}", parts.join("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_adds_exponents() {
        let velocity = Dimension::METER.divide(&Dimension::SECOND);
        let area = Dimension::METER.multiply(&Dimension::METER);
        assert_eq!(velocity.length, 1);
        assert_eq!(velocity.time, -1);
        assert_eq!(area.length, 2);
    }

    #[test]
    fn test_divide_cancels() {
        let ratio = Dimension::METER.divide(&Dimension::METER);
        assert!(ratio.is_dimensionless());
    }

    #[test]
    fn test_pow_scales_exponents() {
        let volume = Dimension::METER.pow(3);
        assert_eq!(volume.length, 3);

        let inverse = Dimension::SECOND.pow(-2);
        assert_eq!(inverse.time, -2);

        assert_eq!(Dimension::KELVIN.pow(0), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_pow_saturates() {
        let extreme = Dimension::METER.pow(1000);
        assert_eq!(extreme.length, i8::MAX);

        let negated = Dimension::METER.pow(-1000);
        assert_eq!(negated.length, i8::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimension::METER.to_string(), "m");
        assert_eq!(Dimension::METER.pow(2).to_string(), "m^2");
        assert_eq!(
            Dimension::METER.divide(&Dimension::SECOND).to_string(),
            "m*s^-1"
        );
    }
}
