//! Heat and mass transfer.

use crate::common::{check_finite, checked_div, checked_ln, checked_powf, input};
use crate::descriptor::{Formula, FormulaInfo, Inputs, ParamSpec};
use crate::error::FormulaResult;

const LMTD_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new("dT1", "ΔT₁", "K", 30.0),
    ParamSpec::new("dT2", "ΔT₂", "K", 10.0),
];

const LMTD_INFO: FormulaInfo = FormulaInfo {
    name: "LMTD",
    description: "Log-Mean Temperature Difference for heat exchangers",
    formula_text: "LMTD = (ΔT₁ − ΔT₂) / ln(ΔT₁ / ΔT₂)",
    params: &LMTD_PARAMS,
    result_label: "LMTD",
    result_unit: "K",
};

/// (ΔT₁ − ΔT₂)/ln(ΔT₁/ΔT₂). Undefined when the terminal differences are
/// equal or of opposite sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lmtd;

impl Formula for Lmtd {
    fn info(&self) -> &FormulaInfo {
        &LMTD_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let dt1 = input(p, "dT1")?;
        let dt2 = input(p, "dT2")?;
        let ratio = checked_div(dt1, dt2, "ΔT₂")?;
        let log_ratio = checked_ln(ratio, "ΔT₁/ΔT₂")?;
        checked_div(dt1 - dt2, log_ratio, "ln(ΔT₁/ΔT₂)")
    }
}

const FOURIER_PARAMS: [ParamSpec; 4] = [
    ParamSpec::new("k", "Thermal Conductivity", "W/(m·K)", 0.6),
    ParamSpec::new("A", "Area", "m²", 1.0),
    ParamSpec::new("dT", "Temperature Difference", "K", 20.0),
    ParamSpec::new("L", "Wall Thickness", "m", 0.1),
];

const FOURIER_INFO: FormulaInfo = FormulaInfo {
    name: "Fourier Conduction",
    description: "Steady one-dimensional heat conduction through a plane wall",
    formula_text: "q = k·A·ΔT / L",
    params: &FOURIER_PARAMS,
    result_label: "Heat Rate",
    result_unit: "W",
};

/// q = kAΔT/L
#[derive(Debug, Clone, Copy, Default)]
pub struct FourierConduction;

impl Formula for FourierConduction {
    fn info(&self) -> &FormulaInfo {
        &FOURIER_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let conductance = input(p, "k")? * input(p, "A")? * input(p, "dT")?;
        checked_div(conductance, input(p, "L")?, "wall thickness")
    }
}

const DITTUS_BOELTER_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("Re", "Reynolds Number", "", 50_000.0),
    ParamSpec::new("Pr", "Prandtl Number", "", 7.0),
    ParamSpec::new("n", "Exponent n (0.4 heating, 0.3 cooling)", "", 0.4),
];

const DITTUS_BOELTER_INFO: FormulaInfo = FormulaInfo {
    name: "Dittus-Boelter",
    description: "Nusselt number for turbulent heat transfer in smooth tubes",
    formula_text: "Nu = 0.023·Re^0.8·Pr^n",
    params: &DITTUS_BOELTER_PARAMS,
    result_label: "Nusselt Number",
    result_unit: "",
};

/// Nu = 0.023 Re^0.8 Pr^n
#[derive(Debug, Clone, Copy, Default)]
pub struct DittusBoelter;

impl Formula for DittusBoelter {
    fn info(&self) -> &FormulaInfo {
        &DITTUS_BOELTER_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let re_term = checked_powf(input(p, "Re")?, 0.8, "Reynolds number")?;
        let pr_term = checked_powf(input(p, "Pr")?, input(p, "n")?, "Prandtl number")?;
        check_finite(0.023 * re_term * pr_term, "Nusselt number")
    }
}

const FICK_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("D", "Diffusion Coefficient", "m²/s", 1e-9),
    ParamSpec::new("dC", "Concentration Difference", "mol/m³", 1.0),
    ParamSpec::new("dx", "Diffusion Length", "m", 0.001),
];

const FICK_INFO: FormulaInfo = FormulaInfo {
    name: "Fick's Law",
    description: "Steady diffusive molar flux across a film (mass transfer)",
    formula_text: "J = D·ΔC / Δx",
    params: &FICK_PARAMS,
    result_label: "Molar Flux",
    result_unit: "mol/(m²·s)",
};

/// J = D ΔC/Δx
#[derive(Debug, Clone, Copy, Default)]
pub struct FicksLaw;

impl Formula for FicksLaw {
    fn info(&self) -> &FormulaInfo {
        &FICK_INFO
    }

    fn compute(&self, p: &Inputs) -> FormulaResult<f64> {
        let driving = input(p, "D")? * input(p, "dC")?;
        checked_div(driving, input(p, "dx")?, "diffusion length")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;

    fn lmtd(dt1: f64, dt2: f64) -> FormulaResult<f64> {
        let mut p = Inputs::new();
        p.insert("dT1".into(), dt1);
        p.insert("dT2".into(), dt2);
        Lmtd.compute(&p)
    }

    #[test]
    fn lmtd_reference_case() {
        let value = lmtd(30.0, 10.0).unwrap();
        assert!((value - 20.0 / 3.0_f64.ln()).abs() < 1e-12);
        assert!((value - 18.2048).abs() < 1e-4);
    }

    #[test]
    fn lmtd_is_symmetric() {
        let a = lmtd(30.0, 10.0).unwrap();
        let b = lmtd(10.0, 30.0).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn lmtd_equal_differences() {
        assert!(matches!(
            lmtd(15.0, 15.0),
            Err(FormulaError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn lmtd_opposite_signs() {
        assert!(matches!(
            lmtd(10.0, -5.0),
            Err(FormulaError::NonPositive { .. })
        ));
        assert!(lmtd(10.0, 0.0).is_err());
    }

    #[test]
    fn fourier_wall() {
        let mut p = Inputs::new();
        for spec in FOURIER_PARAMS {
            p.insert(spec.key.into(), spec.default);
        }
        assert!((FourierConduction.compute(&p).unwrap() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn dittus_boelter_rejects_negative_reynolds() {
        let mut p = Inputs::new();
        for spec in DITTUS_BOELTER_PARAMS {
            p.insert(spec.key.into(), spec.default);
        }
        let nu = DittusBoelter.compute(&p).unwrap();
        assert!(nu > 200.0 && nu < 400.0, "got {nu}");

        p.insert("Re".into(), -10.0);
        assert!(matches!(
            DittusBoelter.compute(&p),
            Err(FormulaError::NonPositive { .. })
        ));
    }

    #[test]
    fn fick_flux() {
        let mut p = Inputs::new();
        for spec in FICK_PARAMS {
            p.insert(spec.key.into(), spec.default);
        }
        assert!((FicksLaw.compute(&p).unwrap() - 1e-6).abs() < 1e-18);
    }
}
