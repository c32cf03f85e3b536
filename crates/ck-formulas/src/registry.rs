//! Formula registry: ordered, name-keyed, searchable.
//!
//! The registry is read-only once built. `FormulaRegistry::standard()` is the
//! process-wide instance, initialized on first use and shared by reference.

use crate::catalog::standard_formulas;
use crate::descriptor::FormulaDescriptor;
use crate::error::{RegistryError, RegistryResult};
use std::collections::HashSet;
use std::sync::OnceLock;

static STANDARD: OnceLock<FormulaRegistry> = OnceLock::new();

#[derive(Debug)]
pub struct FormulaRegistry {
    formulas: Vec<FormulaDescriptor>,
}

impl FormulaRegistry {
    /// Build a registry, rejecting duplicate formula names and duplicate
    /// parameter keys within a formula.
    pub fn new(formulas: Vec<FormulaDescriptor>) -> RegistryResult<Self> {
        let mut names = HashSet::new();
        for formula in &formulas {
            if !names.insert(formula.name()) {
                return Err(RegistryError::DuplicateFormula {
                    name: formula.name().to_string(),
                });
            }

            let mut keys = HashSet::new();
            for key in formula.keys() {
                if !keys.insert(key) {
                    return Err(RegistryError::DuplicateParameter {
                        formula: formula.name().to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(Self { formulas })
    }

    /// The built-in catalog.
    pub fn standard() -> &'static FormulaRegistry {
        // The built-in catalog is checked by `standard_catalog_is_valid`.
        STANDARD.get_or_init(|| Self {
            formulas: standard_formulas(),
        })
    }

    /// All formulas in insertion order.
    pub fn all(&self) -> &[FormulaDescriptor] {
        &self.formulas
    }

    pub fn get(&self, name: &str) -> RegistryResult<&FormulaDescriptor> {
        self.formulas
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Formulas whose name or description contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&FormulaDescriptor> {
        self.formulas
            .iter()
            .filter(|f| f.matches_query(query))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.formulas.iter().map(|f| f.name())
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
