//! Unit definitions and dimensions.

use crate::error::{UnitError, UnitResult};
use std::collections::HashSet;
use std::fmt;

/// Map between a unit and its dimension's base unit.
///
/// `to_base(x) = (x + offset) * factor`, `from_base(y) = y / factor - offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitScale {
    /// Pure scaling (pressure, length, ...)
    Linear { factor: f64 },
    /// Scaling after an offset (temperature scales)
    Affine { factor: f64, offset: f64 },
}

impl UnitScale {
    pub const IDENTITY: UnitScale = UnitScale::Linear { factor: 1.0 };

    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Linear { factor } => value * factor,
            Self::Affine { factor, offset } => (value + offset) * factor,
        }
    }

    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Linear { factor } => value / factor,
            Self::Affine { factor, offset } => value / factor - offset,
        }
    }

    fn factor(self) -> f64 {
        match self {
            Self::Linear { factor } | Self::Affine { factor, .. } => factor,
        }
    }

    fn is_identity(self) -> bool {
        match self {
            Self::Linear { factor } => factor == 1.0,
            Self::Affine { factor, offset } => factor == 1.0 && offset == 0.0,
        }
    }
}

/// One unit of a dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    /// Display symbol, e.g. `"°C"`
    pub symbol: &'static str,
    /// Long name, e.g. `"degree Celsius"`
    pub name: &'static str,
    /// Alternative spellings accepted on input, e.g. `"C"`
    pub aliases: &'static [&'static str],
    pub scale: UnitScale,
}

impl UnitDef {
    pub const fn linear(symbol: &'static str, name: &'static str, factor: f64) -> Self {
        Self {
            symbol,
            name,
            aliases: &[],
            scale: UnitScale::Linear { factor },
        }
    }

    pub const fn affine(
        symbol: &'static str,
        name: &'static str,
        factor: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            aliases: &[],
            scale: UnitScale::Affine { factor, offset },
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.scale.to_base(value)
    }

    pub fn from_base(&self, value: f64) -> f64 {
        self.scale.from_base(value)
    }

    /// Exact match against the symbol or any alias.
    pub fn answers_to(&self, text: &str) -> bool {
        self.symbol == text || self.aliases.contains(&text)
    }

    fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.symbol).chain(self.aliases.iter().copied())
    }
}

/// A quantity family whose units all convert through one base unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDimension {
    name: &'static str,
    base: &'static str,
    units: Vec<UnitDef>,
}

impl UnitDimension {
    /// Build a dimension. `base` must name one of `units` with an identity
    /// scale; every factor must be finite and non-zero; symbols and aliases
    /// must be unique.
    pub fn new(name: &'static str, base: &'static str, units: Vec<UnitDef>) -> UnitResult<Self> {
        let mut seen = HashSet::new();
        for unit in &units {
            let factor = unit.scale.factor();
            if !factor.is_finite() || factor == 0.0 {
                return Err(UnitError::InvalidDefinition {
                    what: format!("{name}: unit '{}' has factor {factor}", unit.symbol),
                });
            }
            for spelling in unit.spellings() {
                if !seen.insert(spelling) {
                    return Err(UnitError::InvalidDefinition {
                        what: format!("{name}: unit symbol '{spelling}' is declared twice"),
                    });
                }
            }
        }

        match units.iter().find(|u| u.symbol == base) {
            Some(unit) if unit.scale.is_identity() => {}
            Some(_) => {
                return Err(UnitError::InvalidDefinition {
                    what: format!("{name}: base unit '{base}' must have an identity scale"),
                });
            }
            None => {
                return Err(UnitError::InvalidDefinition {
                    what: format!("{name}: base unit '{base}' is not among its units"),
                });
            }
        }

        Ok(Self::unchecked(name, base, units))
    }

    /// Build without validation; the built-in tables are checked by tests.
    pub(crate) fn unchecked(name: &'static str, base: &'static str, units: Vec<UnitDef>) -> Self {
        Self { name, base, units }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Symbol of the base unit.
    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.units.iter().map(|u| u.symbol)
    }

    /// Exact lookup by symbol or alias.
    pub fn unit(&self, symbol: &str) -> UnitResult<&UnitDef> {
        self.units
            .iter()
            .find(|u| u.answers_to(symbol))
            .ok_or_else(|| UnitError::UnknownUnit {
                unit: symbol.to_string(),
                dimension: self.name.to_string(),
            })
    }

    /// Lenient lookup for typed input: exact first, then a case-insensitive
    /// match if it is unambiguous.
    pub fn find_unit(&self, text: &str) -> UnitResult<&UnitDef> {
        let text = text.trim();
        if let Ok(unit) = self.unit(text) {
            return Ok(unit);
        }

        let lowered = text.to_lowercase();
        let mut matches = self
            .units
            .iter()
            .filter(|u| u.spellings().any(|s| s.to_lowercase() == lowered));
        match (matches.next(), matches.next()) {
            (Some(unit), None) => Ok(unit),
            _ => Err(UnitError::UnknownUnit {
                unit: text.to_string(),
                dimension: self.name.to_string(),
            }),
        }
    }
}

impl fmt::Display for UnitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<_> = self.symbols().collect();
        write!(f, "{} [{}] (base: {})", self.name, symbols.join(", "), self.base)
    }
}
