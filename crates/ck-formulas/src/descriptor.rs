//! Formula trait and the descriptor the registry stores.

use crate::common::check_finite;
use crate::error::FormulaResult;
use std::collections::BTreeMap;
use std::fmt;

/// Named numeric inputs for a formula (parameter key -> value).
pub type Inputs = BTreeMap<String, f64>;

/// One declared input of a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Key used in the input mapping (e.g. `"mu"`)
    pub key: &'static str,
    /// Human label (e.g. `"Dynamic Viscosity"`)
    pub label: &'static str,
    /// Free-text unit label, display only
    pub unit: &'static str,
    /// Default value shown to the user
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        unit: &'static str,
        default: f64,
    ) -> Self {
        Self {
            key,
            label,
            unit,
            default,
        }
    }

    /// Label with the unit appended in parentheses when there is one.
    pub fn axis_label(&self) -> String {
        with_unit(self.label, self.unit)
    }
}

/// Static metadata for one formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Human-readable notation, display only
    pub formula_text: &'static str,
    /// Declared inputs, in display order
    pub params: &'static [ParamSpec],
    pub result_label: &'static str,
    pub result_unit: &'static str,
}

/// A closed-form equation over named inputs.
///
/// Implementations are pure: the same inputs always give the same output and
/// `compute` only reads keys declared in `info().params`.
pub trait Formula: Send + Sync {
    fn info(&self) -> &FormulaInfo;

    /// Evaluate the equation. Domain failures are returned, never panicked.
    fn compute(&self, inputs: &Inputs) -> FormulaResult<f64>;
}

/// Formula backed by a plain function pointer.
///
/// Useful for registries assembled at runtime (tests, plugins) where a
/// dedicated type per equation would be noise.
pub struct FnFormula {
    info: FormulaInfo,
    compute: fn(&Inputs) -> FormulaResult<f64>,
}

impl FnFormula {
    pub fn new(info: FormulaInfo, compute: fn(&Inputs) -> FormulaResult<f64>) -> Self {
        Self { info, compute }
    }
}

impl Formula for FnFormula {
    fn info(&self) -> &FormulaInfo {
        &self.info
    }

    fn compute(&self, inputs: &Inputs) -> FormulaResult<f64> {
        (self.compute)(inputs)
    }
}

/// Uniform handle over any formula, as stored by the registry.
pub struct FormulaDescriptor {
    formula: Box<dyn Formula>,
}

impl FormulaDescriptor {
    pub fn new(formula: impl Formula + 'static) -> Self {
        Self {
            formula: Box::new(formula),
        }
    }

    pub fn info(&self) -> &FormulaInfo {
        self.formula.info()
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    pub fn formula_text(&self) -> &'static str {
        self.info().formula_text
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        self.info().params
    }

    pub fn result_label(&self) -> &'static str {
        self.info().result_label
    }

    pub fn result_unit(&self) -> &'static str {
        self.info().result_unit
    }

    /// Result label with its unit, e.g. `"Pressure Drop (Pa)"`.
    pub fn result_axis_label(&self) -> String {
        with_unit(self.result_label(), self.result_unit())
    }

    pub fn param(&self, key: &str) -> Option<&'static ParamSpec> {
        self.params().iter().find(|p| p.key == key)
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.param(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.params().iter().map(|p| p.key)
    }

    /// The declared defaults as an input mapping.
    pub fn defaults(&self) -> Inputs {
        self.params()
            .iter()
            .map(|p| (p.key.to_string(), p.default))
            .collect()
    }

    /// Run the formula body and reject non-finite results.
    pub fn compute(&self, inputs: &Inputs) -> FormulaResult<f64> {
        let value = self.formula.compute(inputs)?;
        check_finite(value, "result")
    }

    /// Case-insensitive substring match against name or description. Only
    /// the empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name().to_lowercase().contains(&query)
            || self.description().to_lowercase().contains(&query)
    }
}

impl fmt::Debug for FormulaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormulaDescriptor")
            .field("name", &self.name())
            .field("params", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for FormulaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.formula_text())
    }
}

fn with_unit(label: &str, unit: &str) -> String {
    if unit.is_empty() {
        label.to_string()
    } else {
        format!("{label} ({unit})")
    }
}
