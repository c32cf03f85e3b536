//! Fluid mechanics: pipe flow regime, friction losses, pump sizing.

use crate::common::{check_finite, checked_div, input};
use crate::descriptor::{Formula, FormulaInfo, Inputs, ParamSpec};
use crate::error::FormulaResult;
use ck_core::constants::G_MPS2;
use std::fmt;

/// Upper Reynolds number for laminar pipe flow.
pub const RE_LAMINAR_MAX: f64 = 2300.0;

/// Lower Reynolds number for fully turbulent pipe flow.
pub const RE_TURBULENT_MIN: f64 = 4000.0;

/// Pipe flow regime classified from a Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64) -> Self {
        let re = reynolds.abs();
        if re < RE_LAMINAR_MAX {
            Self::Laminar
        } else if re <= RE_TURBULENT_MIN {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "laminar"),
            Self::Transitional => write!(f, "transitional"),
            Self::Turbulent => write!(f, "turbulent"),
        }
    }
}

const REYNOLDS_PARAMS: [ParamSpec; 4] = [
    ParamSpec::new("rho", "Fluid Density", "kg/m³", 1000.0),
    ParamSpec::new("v", "Fluid Velocity", "m/s", 1.0),
    ParamSpec::new("D", "Pipe Diameter", "m", 0.05),
    ParamSpec::new("mu", "Dynamic Viscosity", "Pa·s", 0.001),
];

const REYNOLDS_INFO: FormulaInfo = FormulaInfo {
    name: "Reynolds Number",
    description: "Determines flow regime (laminar, transitional, turbulent)",
    formula_text: "Re = ρ·v·D / μ",
    params: &REYNOLDS_PARAMS,
    result_label: "Reynolds Number",
    result_unit: "",
};

/// Re = ρvD/μ
#[derive(Debug, Clone, Copy, Default)]
pub struct ReynoldsNumber;

impl Formula for ReynoldsNumber {
    fn info(&self) -> &FormulaInfo {
        &REYNOLDS_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let inertia = input(p, "rho")? * input(p, "v")? * input(p, "D")?;
        checked_div(inertia, input(p, "mu")?, "dynamic viscosity")
    }
}

const DARCY_PARAMS: [ParamSpec; 5] = [
    ParamSpec::new("f", "Friction Factor", "", 0.02),
    ParamSpec::new("L", "Pipe Length", "m", 100.0),
    ParamSpec::new("D", "Pipe Diameter", "m", 0.05),
    ParamSpec::new("rho", "Fluid Density", "kg/m³", 1000.0),
    ParamSpec::new("v", "Velocity", "m/s", 2.0),
];

const DARCY_INFO: FormulaInfo = FormulaInfo {
    name: "Darcy-Weisbach",
    description: "Calculates pressure drop due to friction in a pipe",
    formula_text: "ΔP = f·(L/D)·(ρ·v²/2)",
    params: &DARCY_PARAMS,
    result_label: "Pressure Drop",
    result_unit: "Pa",
};

/// ΔP = f (L/D) (ρv²/2)
#[derive(Debug, Clone, Copy, Default)]
pub struct DarcyWeisbach;

impl Formula for DarcyWeisbach {
    fn info(&self) -> &FormulaInfo {
        &DARCY_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let slenderness = checked_div(input(p, "L")?, input(p, "D")?, "pipe diameter")?;
        let v = input(p, "v")?;
        let dynamic_pressure = input(p, "rho")? * v * v / 2.0;
        check_finite(input(p, "f")? * slenderness * dynamic_pressure, "pressure drop")
    }
}

const PUMP_PARAMS: [ParamSpec; 4] = [
    ParamSpec::new("rho", "Density", "kg/m³", 1000.0),
    ParamSpec::new("Q", "Flow Rate", "m³/s", 0.01),
    ParamSpec::new("H", "Head", "m", 10.0),
    ParamSpec::new("eff", "Pump Efficiency", "0-1", 0.8),
];

const PUMP_INFO: FormulaInfo = FormulaInfo {
    name: "Pump Power",
    description: "Calculates pump power needed for fluid transport",
    formula_text: "P = ρ·g·Q·H / η",
    params: &PUMP_PARAMS,
    result_label: "Pump Power",
    result_unit: "W",
};

/// P = ρgQH/η
#[derive(Debug, Clone, Copy, Default)]
pub struct PumpPower;

impl Formula for PumpPower {
    fn info(&self) -> &FormulaInfo {
        &PUMP_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let hydraulic = input(p, "rho")? * G_MPS2 * input(p, "Q")? * input(p, "H")?;
        checked_div(hydraulic, input(p, "eff")?, "pump efficiency")
    }
}
