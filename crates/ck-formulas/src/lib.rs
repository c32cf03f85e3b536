//! ck-formulas: closed-form engineering formulas for chemkit.
//!
//! Provides:
//! - `Formula` trait: metadata + pure `compute` over named inputs
//! - `FormulaDescriptor`: the registry's uniform handle over any formula
//! - Built-in catalog (fluid mechanics, reaction kinetics, heat/mass transfer)
//! - `FormulaRegistry`: ordered, name-keyed, searchable, read-only after build
//!
//! # Example
//!
//! ```
//! use ck_formulas::FormulaRegistry;
//!
//! let registry = FormulaRegistry::standard();
//! let reynolds = registry.get("Reynolds Number").unwrap();
//! let re = reynolds.compute(&reynolds.defaults()).unwrap();
//! assert!((re - 50_000.0).abs() < 1e-6);
//! ```

pub mod catalog;
pub mod common;
pub mod descriptor;
pub mod error;
pub mod fluids;
pub mod kinetics;
pub mod registry;
pub mod thermo;
pub mod transfer;

// Re-exports
pub use catalog::standard_formulas;
pub use descriptor::{FnFormula, Formula, FormulaDescriptor, FormulaInfo, Inputs, ParamSpec};
pub use error::{FormulaError, FormulaResult, RegistryError, RegistryResult};
pub use registry::FormulaRegistry;
