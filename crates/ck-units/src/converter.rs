//! Converter over a unit table.

use crate::dimension::UnitDimension;
use crate::error::UnitResult;
use crate::tables::{UnitTable, convert_in};

/// Converts values between units of one dimension, always via its base unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<'t> {
    table: &'t UnitTable,
}

impl UnitConverter<'static> {
    /// Converter over the built-in table.
    pub fn standard() -> Self {
        Self::new(UnitTable::standard())
    }
}

impl<'t> UnitConverter<'t> {
    pub fn new(table: &'t UnitTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t UnitTable {
        self.table
    }

    /// Exact-name conversion.
    ///
    /// `base = from.to_base(value)`, then `to.from_base(base)`. Converting a
    /// unit to itself returns `value` untouched.
    pub fn convert(&self, dimension: &str, from: &str, to: &str, value: f64) -> UnitResult<f64> {
        self.table.convert(dimension, from, to, value)
    }

    /// Conversion for typed input: dimension names ignore case and
    /// separators, unit symbols fall back to a unique case-insensitive match.
    pub fn convert_lenient(
        &self,
        dimension: &str,
        from: &str,
        to: &str,
        value: f64,
    ) -> UnitResult<f64> {
        let dim = self.table.find_dimension(dimension)?;
        convert_in(dim, dim.find_unit(from)?, dim.find_unit(to)?, value)
    }

    pub fn dimension(&self, name: &str) -> UnitResult<&'t UnitDimension> {
        self.table.find_dimension(name)
    }
}
