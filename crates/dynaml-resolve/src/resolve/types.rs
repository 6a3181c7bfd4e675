//! Registry of named unit types.
//!
//! Model sources refer to units by symbol (`mV`, `ms`, `nS`); analysis
//! refers to them by value. The registry keeps the mapping between the two
//! so diagnostics and reports can name a derived dimension when a name
//! exists, and mints one on demand when it does not.
//!
//! Lookup is best-effort by design: `type_for_unit` always yields a type.
//! An unusual derived unit (say `mV^3`) has no conventional symbol, but it
//! is still a perfectly valid quantity; it is interned under its
//! dimensional rendering.

use dynaml_ast::foundation::Type;
use dynaml_units::{resolve_symbol, Dimension, Unit};
use indexmap::IndexMap;

/// Unit symbols registered up front.
///
/// The SI bases plus the quantities model equations use daily: membrane
/// potentials, synaptic conductances and currents, capacitances, time
/// constants, concentrations.
const PREDEFINED_UNIT_SYMBOLS: &[&str] = &[
    "m", "kg", "s", "A", "K", "mol", "cd", // SI bases
    "Hz", "N", "V", "Ohm", "S", "F", "C", "M", // derived
    "ms", "mV", "pA", "nA", "nS", "uS", "pF", "mM", "uM", // scaled forms
];

/// Identity of a unit for registry lookup.
///
/// Scale participates in identity (mV and V are distinct named types), so
/// the float is keyed by its bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct UnitKey {
    dims: Dimension,
    scale_bits: u64,
}

impl UnitKey {
    fn of(unit: &Unit) -> Self {
        Self {
            dims: *unit.dims(),
            scale_bits: unit.scale().to_bits(),
        }
    }
}

/// Registry mapping unit values to their display names.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    unit_names: IndexMap<UnitKey, String>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the predefined unit symbols.
    pub fn with_predefined() -> Self {
        let mut registry = Self::new();
        for &symbol in PREDEFINED_UNIT_SYMBOLS {
            let unit = resolve_symbol(symbol)
                .expect("predefined unit symbols always resolve");
            registry.register_unit_name(unit, symbol);
        }
        registry
    }

    /// Register a display name for a unit.
    ///
    /// The first name registered for a unit wins; later registrations for
    /// the same unit are ignored so synthesized names never shadow
    /// conventional symbols.
    pub fn register_unit_name(&mut self, unit: Unit, name: impl Into<String>) {
        self.unit_names
            .entry(UnitKey::of(&unit))
            .or_insert_with(|| name.into());
    }

    /// Look up the display name of a unit, if one is registered.
    pub fn name_of(&self, unit: &Unit) -> Option<&str> {
        self.unit_names
            .get(&UnitKey::of(unit))
            .map(String::as_str)
    }

    /// The type of a quantity measured in `unit`.
    ///
    /// Best-effort lookup: a unit never seen before is interned under its
    /// dimensional rendering. Always returns a unit type.
    pub fn type_for_unit(&mut self, unit: Unit) -> Type {
        self.unit_names
            .entry(UnitKey::of(&unit))
            .or_insert_with(|| unit.to_string());
        Type::Unit(unit)
    }

    /// Number of registered unit names.
    pub fn len(&self) -> usize {
        self.unit_names.len()
    }

    /// Check whether no unit names are registered.
    pub fn is_empty(&self) -> bool {
        self.unit_names.is_empty()
    }

    /// Iterate over registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.unit_names.values().map(String::as_str)
    }
}
