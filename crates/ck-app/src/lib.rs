//! Shared application service layer for chemkit.
//!
//! Front ends (the CLI and its interactive session) go through this crate for
//! formula lookup, input resolution, calculate-and-record, sweeps, unit
//! conversion, templates, CSV export and configuration.

pub mod config;
pub mod convert_service;
pub mod error;
pub mod export;
pub mod formula_service;
pub mod session;
pub mod sweep_service;
pub mod template_service;

// Re-export key types for convenience
pub use config::{AppConfig, SweepDefaults, load_config, parse_config};
pub use convert_service::{convert, dimension, dimensions};
pub use error::{AppError, AppResult};
pub use export::{history_csv, sweep_csv, templates_csv, write_export};
pub use formula_service::{
    Calculation, calculate, list_formulas, parse_assignments, resolve_formula, resolve_inputs,
};
pub use session::Session;
pub use sweep_service::{SweepRequest, run_sweep};
pub use template_service::{apply_template, delete_template, list_templates, save_template};

pub use ck_engine::{Spacing, SweepResult};
