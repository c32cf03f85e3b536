//! Reaction kinetics: first-order reactors and rate-constant temperature
//! dependence.

use crate::common::{check_finite, checked_div, checked_exp, input};
use crate::descriptor::{Formula, FormulaInfo, Inputs, ParamSpec};
use crate::error::FormulaResult;
use ck_core::constants::R_J_PER_MOL_K;

const BATCH_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("k", "Rate Constant k", "1/s", 0.1),
    ParamSpec::new("t", "Time", "s", 10.0),
    ParamSpec::new("C0", "Initial Concentration", "mol/L", 1.0),
];

const BATCH_INFO: FormulaInfo = FormulaInfo {
    name: "Batch Reactor",
    description: "1st-order batch reactor concentration",
    formula_text: "C = C0·exp(−k·t)",
    params: &BATCH_PARAMS,
    result_label: "Concentration",
    result_unit: "mol/L",
};

/// C = C0 e^(−kt)
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReactor;

impl Formula for BatchReactor {
    fn info(&self) -> &FormulaInfo {
        &BATCH_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let decay = checked_exp(-input(p, "k")? * input(p, "t")?, "exp(-k·t)")?;
        check_finite(input(p, "C0")? * decay, "concentration")
    }
}

const CSTR_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("k", "Rate Constant k", "1/s", 0.1),
    ParamSpec::new("tau", "Residence Time", "s", 10.0),
    ParamSpec::new("C0", "Feed Concentration", "mol/L", 1.0),
];

const CSTR_INFO: FormulaInfo = FormulaInfo {
    name: "CSTR",
    description: "Steady-state CSTR for 1st order reaction",
    formula_text: "C = C0 / (1 + k·τ)",
    params: &CSTR_PARAMS,
    result_label: "Outlet Concentration",
    result_unit: "mol/L",
};

/// C = C0/(1 + kτ)
#[derive(Debug, Clone, Copy, Default)]
pub struct Cstr;

impl Formula for Cstr {
    fn info(&self) -> &FormulaInfo {
        &CSTR_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let damkohler = input(p, "k")? * input(p, "tau")?;
        checked_div(input(p, "C0")?, 1.0 + damkohler, "1 + k·τ")
    }
}

const ARRHENIUS_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("A", "Frequency Factor A", "", 1e10),
    ParamSpec::new("Ea", "Activation Energy", "J/mol", 50_000.0),
    ParamSpec::new("T", "Temperature", "K", 298.0),
];

const ARRHENIUS_INFO: FormulaInfo = FormulaInfo {
    name: "Arrhenius Equation",
    description: "Temperature dependence of rate constant",
    formula_text: "k = A·exp(−Ea / (R·T))",
    params: &ARRHENIUS_PARAMS,
    result_label: "Rate Constant k",
    result_unit: "",
};

/// k = A e^(−Ea/RT)
#[derive(Debug, Clone, Copy, Default)]
pub struct Arrhenius;

impl Formula for Arrhenius {
    fn info(&self) -> &FormulaInfo {
        &ARRHENIUS_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let exponent = checked_div(
            -input(p, "Ea")?,
            R_J_PER_MOL_K * input(p, "T")?,
            "temperature",
        )?;
        let boltzmann = checked_exp(exponent, "exp(-Ea/RT)")?;
        check_finite(input(p, "A")? * boltzmann, "rate constant")
    }
}
