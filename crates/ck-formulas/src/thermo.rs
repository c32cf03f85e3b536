//! Thermodynamic property correlations.

use crate::common::{check_finite, checked_div, input};
use crate::descriptor::{Formula, FormulaInfo, Inputs, ParamSpec};
use crate::error::FormulaResult;
use ck_core::constants::R_J_PER_MOL_K;

const ANTOINE_PARAMS: [ParamSpec; 4] = [
    ParamSpec::new("A", "Coefficient A", "", 8.07131),
    ParamSpec::new("B", "Coefficient B", "", 1730.63),
    ParamSpec::new("C", "Coefficient C", "", 233.426),
    ParamSpec::new("T", "Temperature", "°C", 25.0),
];

const ANTOINE_INFO: FormulaInfo = FormulaInfo {
    name: "Antoine Equation",
    description: "Gives vapor pressure of a pure component",
    formula_text: "P = 10^(A − B / (T + C))",
    params: &ANTOINE_PARAMS,
    result_label: "Vapor Pressure",
    result_unit: "mmHg",
};

/// log10 P = A − B/(T + C). Defaults are the water coefficients (1–100 °C).
#[derive(Debug, Clone, Copy, Default)]
pub struct Antoine;

impl Formula for Antoine {
    fn info(&self) -> &FormulaInfo {
        &ANTOINE_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let shifted_t = input(p, "T")? + input(p, "C")?;
        let log10_p = input(p, "A")? - checked_div(input(p, "B")?, shifted_t, "T + C")?;
        check_finite(10f64.powf(log10_p), "vapor pressure")
    }
}

const IDEAL_GAS_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("n", "Amount of Substance", "mol", 1.0),
    ParamSpec::new("T", "Temperature", "K", 298.15),
    ParamSpec::new("V", "Volume", "m³", 0.0224),
];

const IDEAL_GAS_INFO: FormulaInfo = FormulaInfo {
    name: "Ideal Gas Law",
    description: "Pressure of an ideal gas from amount, temperature and volume",
    formula_text: "P = n·R·T / V",
    params: &IDEAL_GAS_PARAMS,
    result_label: "Pressure",
    result_unit: "Pa",
};

/// P = nRT/V
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealGasLaw;

impl Formula for IdealGasLaw {
    fn info(&self) -> &FormulaInfo {
        &IDEAL_GAS_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let nrt = input(p, "n")? * R_J_PER_MOL_K * input(p, "T")?;
        checked_div(nrt, input(p, "V")?, "volume")
    }
}
