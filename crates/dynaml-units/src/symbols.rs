//! Unit symbol resolution.
//!
//! Maps unit names appearing in model sources (`mV`, `pA`, `nS`, `km`) to
//! [`Unit`] values. Resolution tries an exact match against the base symbol
//! table first, then attempts to split off an SI prefix, so `m` stays meter
//! while `mV` becomes volts at scale 1e-3.

use crate::unit::Unit;
use thiserror::Error;

/// Failure to resolve a unit symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The symbol matches no base unit, with or without a prefix.
    #[error("unknown unit symbol '{0}'")]
    UnknownSymbol(String),
}

/// SI metric prefixes with their powers of ten.
///
/// Ordered by scale for deterministic iteration. ASCII `u` is accepted as a
/// fallback spelling of `μ`.
const SI_PREFIXES: &[(&str, i32)] = &[
    ("T", 12),
    ("G", 9),
    ("M", 6),
    ("k", 3),
    ("c", -2),
    ("m", -3),
    ("μ", -6),
    ("u", -6),
    ("n", -9),
    ("p", -12),
    ("f", -15),
];

/// Symbols that must never be decomposed into prefix + base.
///
/// Checked before prefix parsing so `mol` is mole rather than milli-ol and
/// `m` stays meter rather than milli-something.
const RESERVED_SYMBOLS: &[&str] = &["m", "kg", "s", "A", "K", "mol", "cd", "g", "Hz", "N", "M"];

/// Exact-match lookup against the base symbol table.
fn exact_symbol(name: &str) -> Option<Unit> {
    match name {
        // Dimensionless shorthand
        "1" => Some(Unit::DIMENSIONLESS),

        // SI base units
        "m" => Some(Unit::meters()),
        "kg" => Some(Unit::kilograms()),
        "s" => Some(Unit::seconds()),
        "A" => Some(Unit::amperes()),
        "K" => Some(Unit::kelvin()),
        "mol" => Some(Unit::moles()),
        "cd" => Some(Unit::candelas()),
        "g" => Some(Unit::grams()),

        // Derived units
        "Hz" => Some(Unit::hertz()),
        "N" => Some(Unit::newtons()),
        "V" => Some(Unit::volts()),
        "Ohm" => Some(Unit::ohms()),
        "S" => Some(Unit::siemens()),
        "F" => Some(Unit::farads()),
        "C" => Some(Unit::coulombs()),
        "M" => Some(Unit::molar()),

        _ => None,
    }
}

/// Try to split an SI prefix off the front of a symbol.
fn parse_prefix(name: &str) -> Option<(f64, &str)> {
    if name.chars().count() < 2 {
        return None;
    }
    SI_PREFIXES.iter().find_map(|&(prefix, exp)| {
        name.strip_prefix(prefix)
            .filter(|rest| !rest.is_empty())
            .map(|rest| (10.0_f64.powi(exp), rest))
    })
}

/// Resolve a unit symbol, with SI prefix support.
///
/// Strategy: exact match first (covers reserved symbols), then prefix
/// decomposition against the base table.
///
/// # Errors
///
/// Returns [`UnitError::UnknownSymbol`] if neither strategy matches.
pub fn resolve_symbol(name: &str) -> Result<Unit, UnitError> {
    if let Some(unit) = exact_symbol(name) {
        return Ok(unit);
    }

    if !RESERVED_SYMBOLS.contains(&name) {
        if let Some((prefix_scale, base_name)) = parse_prefix(name) {
            if let Some(base) = exact_symbol(base_name) {
                return Ok(Unit::new(*base.dims(), base.scale() * prefix_scale));
            }
        }
    }

    Err(UnitError::UnknownSymbol(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_symbols() {
        assert_eq!(resolve_symbol("m").unwrap(), Unit::meters());
        assert_eq!(resolve_symbol("s").unwrap(), Unit::seconds());
        assert_eq!(resolve_symbol("V").unwrap(), Unit::volts());
        assert_eq!(resolve_symbol("1").unwrap(), Unit::DIMENSIONLESS);
    }

    #[test]
    fn test_prefixed_symbols() {
        let millivolt = resolve_symbol("mV").unwrap();
        assert_eq!(millivolt.dims(), Unit::volts().dims());
        assert!((millivolt.scale() - 1e-3).abs() < 1e-12);

        let picoampere = resolve_symbol("pA").unwrap();
        assert_eq!(picoampere.dims(), Unit::amperes().dims());
        assert!((picoampere.scale() - 1e-12).abs() < 1e-24);

        let nanosiemens = resolve_symbol("nS").unwrap();
        assert_eq!(nanosiemens.dims(), Unit::siemens().dims());

        let kilometer = resolve_symbol("km").unwrap();
        assert_eq!(kilometer.dims(), Unit::meters().dims());
        assert!((kilometer.scale() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascii_micro_fallback() {
        assert_eq!(resolve_symbol("uS").unwrap(), resolve_symbol("μS").unwrap());
    }

    #[test]
    fn test_reserved_symbols_not_decomposed() {
        // mol is mole, never milli-ol
        assert_eq!(resolve_symbol("mol").unwrap(), Unit::moles());
        // m is meter, never milli-anything
        assert_eq!(resolve_symbol("m").unwrap(), Unit::meters());
        // M is molar, never mega-anything
        assert_eq!(resolve_symbol("M").unwrap(), Unit::molar());
    }

    #[test]
    fn test_unknown_symbol() {
        let err = resolve_symbol("xyz").unwrap_err();
        assert_eq!(err, UnitError::UnknownSymbol("xyz".to_string()));
    }
}
