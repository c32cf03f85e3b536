//! The unit dimension table.
//!
//! Temperature, pressure, length and flow-rate factors are the engineering
//! values the calculator has always used. Metric mass and energy multiples
//! come from `uom`. The pound, ounce, calorie and BTU use their exact
//! defined values, which `uom` rounds to seven digits.

use crate::dimension::{UnitDef, UnitDimension};
use crate::error::{UnitError, UnitResult};
use ck_core::constants::{CELSIUS_OFFSET_K, FAHRENHEIT_OFFSET_R};
use ck_core::normalize_name;
use std::collections::HashSet;
use std::sync::OnceLock;
use uom::si::f64::{Energy, Mass};
use uom::si::{energy, mass};

static STANDARD: OnceLock<UnitTable> = OnceLock::new();

const RANKINE_PER_KELVIN: f64 = 5.0 / 9.0;

/// International avoirdupois pound (1959).
const KG_PER_LB: f64 = 0.453_592_37;
const KG_PER_OZ: f64 = KG_PER_LB / 16.0;
/// Thermochemical calorie.
const J_PER_CAL: f64 = 4.184;
/// International Table BTU.
const J_PER_BTU: f64 = 1_055.055_852_62;

/// Ordered set of dimensions, looked up by name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    dimensions: Vec<UnitDimension>,
}

impl UnitTable {
    /// Build a table, rejecting duplicate dimension names (compared
    /// case-insensitively, since lookup is lenient).
    pub fn new(dimensions: Vec<UnitDimension>) -> UnitResult<Self> {
        let mut names = HashSet::new();
        for dim in &dimensions {
            if !names.insert(normalize_name(dim.name())) {
                return Err(UnitError::InvalidDefinition {
                    what: format!("dimension '{}' is declared twice", dim.name()),
                });
            }
        }
        Ok(Self { dimensions })
    }

    /// The built-in table.
    pub fn standard() -> &'static UnitTable {
        STANDARD.get_or_init(|| Self {
            dimensions: standard_dimensions(),
        })
    }

    pub fn dimensions(&self) -> &[UnitDimension] {
        &self.dimensions
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.dimensions.iter().map(|d| d.name())
    }

    /// Exact lookup by dimension name.
    pub fn dimension(&self, name: &str) -> UnitResult<&UnitDimension> {
        self.dimensions
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| UnitError::UnknownDimension {
                dimension: name.to_string(),
            })
    }

    /// Lenient lookup: ignores case, spaces, `-` and `_`
    /// (`flow_rate` finds `Flow Rate`).
    pub fn find_dimension(&self, name: &str) -> UnitResult<&UnitDimension> {
        let wanted = normalize_name(name);
        self.dimensions
            .iter()
            .find(|d| normalize_name(d.name()) == wanted)
            .ok_or_else(|| UnitError::UnknownDimension {
                dimension: name.trim().to_string(),
            })
    }

    /// Convert `value` within one dimension. Names must match exactly; see
    /// [`UnitTable::find_dimension`] and [`UnitDimension::find_unit`] for
    /// lenient resolution of typed input.
    pub fn convert(&self, dimension: &str, from: &str, to: &str, value: f64) -> UnitResult<f64> {
        let dim = self.dimension(dimension)?;
        convert_in(dim, dim.unit(from)?, dim.unit(to)?, value)
    }
}

/// Convert through the base unit of `dim`.
pub(crate) fn convert_in(
    dim: &UnitDimension,
    from: &UnitDef,
    to: &UnitDef,
    value: f64,
) -> UnitResult<f64> {
    if !value.is_finite() {
        return Err(UnitError::NonFinite {
            what: format!("{} input", dim.name()),
            value,
        });
    }
    if from.symbol == to.symbol {
        return Ok(value);
    }

    let result = to.from_base(from.to_base(value));
    if result.is_finite() {
        Ok(result)
    } else {
        Err(UnitError::NonFinite {
            what: format!("{} {} -> {}", dim.name(), from.symbol, to.symbol),
            value: result,
        })
    }
}

fn kilograms(value: Mass) -> f64 {
    value.get::<mass::kilogram>()
}

fn joules(value: Energy) -> f64 {
    value.get::<energy::joule>()
}

fn standard_dimensions() -> Vec<UnitDimension> {
    vec![
        UnitDimension::unchecked(
            "Temperature",
            "K",
            vec![
                UnitDef::linear("K", "kelvin", 1.0),
                UnitDef::affine("°C", "degree Celsius", 1.0, CELSIUS_OFFSET_K)
                    .with_aliases(&["C", "degC"]),
                UnitDef::affine(
                    "°F",
                    "degree Fahrenheit",
                    RANKINE_PER_KELVIN,
                    FAHRENHEIT_OFFSET_R,
                )
                .with_aliases(&["F", "degF"]),
                UnitDef::linear("R", "degree Rankine", RANKINE_PER_KELVIN)
                    .with_aliases(&["°R", "degR"]),
            ],
        ),
        UnitDimension::unchecked(
            "Pressure",
            "Pa",
            vec![
                UnitDef::linear("Pa", "pascal", 1.0),
                UnitDef::linear("kPa", "kilopascal", 1e3),
                UnitDef::linear("bar", "bar", 1e5),
                UnitDef::linear("psi", "pound-force per square inch", 6894.76),
                UnitDef::linear("atm", "standard atmosphere", 101_325.0),
                UnitDef::linear("mmHg", "millimeter of mercury", 133.322),
            ],
        ),
        UnitDimension::unchecked(
            "Length",
            "m",
            vec![
                UnitDef::linear("m", "meter", 1.0),
                UnitDef::linear("cm", "centimeter", 0.01),
                UnitDef::linear("mm", "millimeter", 0.001),
                UnitDef::linear("ft", "foot", 0.3048),
                UnitDef::linear("in", "inch", 0.0254),
            ],
        ),
        UnitDimension::unchecked(
            "Flow Rate",
            "m³/s",
            vec![
                UnitDef::linear("m³/s", "cubic meter per second", 1.0).with_aliases(&["m3/s"]),
                UnitDef::linear("m³/h", "cubic meter per hour", 1.0 / 3600.0)
                    .with_aliases(&["m3/h"]),
                UnitDef::linear("L/min", "liter per minute", 1.0 / 60_000.0)
                    .with_aliases(&["lpm"]),
                UnitDef::linear("L/s", "liter per second", 1.0 / 1000.0),
                UnitDef::linear("gpm", "US gallon per minute", 0.000_063_09),
            ],
        ),
        UnitDimension::unchecked(
            "Mass",
            "kg",
            vec![
                UnitDef::linear("kg", "kilogram", 1.0),
                UnitDef::linear("g", "gram", kilograms(Mass::new::<mass::gram>(1.0))),
                UnitDef::linear("t", "tonne", kilograms(Mass::new::<mass::ton>(1.0))),
                UnitDef::linear("lb", "pound", KG_PER_LB)
                    .with_aliases(&["lbm"]),
                UnitDef::linear("oz", "ounce", KG_PER_OZ),
            ],
        ),
        UnitDimension::unchecked(
            "Energy",
            "J",
            vec![
                UnitDef::linear("J", "joule", 1.0),
                UnitDef::linear(
                    "kJ",
                    "kilojoule",
                    joules(Energy::new::<energy::kilojoule>(1.0)),
                ),
                UnitDef::linear(
                    "kWh",
                    "kilowatt hour",
                    joules(Energy::new::<energy::kilowatt_hour>(1.0)),
                ),
                UnitDef::linear("cal", "calorie", J_PER_CAL),
                UnitDef::linear("BTU", "British thermal unit (IT)", J_PER_BTU)
                    .with_aliases(&["Btu"]),
            ],
        ),
    ]
}
