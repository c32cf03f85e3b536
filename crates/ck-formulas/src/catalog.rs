use crate::descriptor::FormulaDescriptor;
use crate::fluids::{DarcyWeisbach, PumpPower, ReynoldsNumber};
use crate::kinetics::{Arrhenius, BatchReactor, Cstr};
use crate::thermo::{Antoine, IdealGasLaw};
use crate::transfer::{DittusBoelter, FicksLaw, FourierConduction, Lmtd};

/// Built-in formulas, in display order.
pub fn standard_formulas() -> Vec<FormulaDescriptor> {
    vec![
        FormulaDescriptor::new(ReynoldsNumber),
        FormulaDescriptor::new(DarcyWeisbach),
        FormulaDescriptor::new(PumpPower),
        FormulaDescriptor::new(Antoine),
        FormulaDescriptor::new(BatchReactor),
        FormulaDescriptor::new(Cstr),
        FormulaDescriptor::new(Lmtd),
        FormulaDescriptor::new(Arrhenius),
        FormulaDescriptor::new(FourierConduction),
        FormulaDescriptor::new(DittusBoelter),
        FormulaDescriptor::new(FicksLaw),
        FormulaDescriptor::new(IdealGasLaw),
    ]
}
