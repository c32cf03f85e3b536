//! ck-core: stable foundation for chemkit.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - constants (physical constants shared by the formula catalog)
//! - error (shared error types)
//! - text (name normalization for lenient lookups)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod text;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use text::normalize_name;
