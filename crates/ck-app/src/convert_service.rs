//! Unit conversion for typed input.

use crate::error::AppResult;
use ck_units::{UnitConverter, UnitDimension, UnitTable};

/// Convert `value` from one unit to another.
///
/// The dimension name ignores case and separators; unit symbols accept their
/// ASCII aliases (`C` for `°C`, `m3/h` for `m³/h`).
pub fn convert(dimension: &str, from: &str, to: &str, value: f64) -> AppResult<f64> {
    let result = UnitConverter::standard().convert_lenient(dimension, from, to, value)?;
    tracing::debug!(dimension, from, to, value, result, "converted");
    Ok(result)
}

/// All known dimensions, in display order.
pub fn dimensions() -> &'static [UnitDimension] {
    UnitTable::standard().dimensions()
}

pub fn dimension(name: &str) -> AppResult<&'static UnitDimension> {
    Ok(UnitTable::standard().find_dimension(name)?)
}
