//! Named input templates.

use crate::error::{AppError, AppResult};
use crate::formula_service::{Calculation, calculate, resolve_formula, resolve_inputs};
use crate::session::Session;
use ck_formulas::Inputs;
use ck_session::Template;

/// Save the full input set (defaults overlaid with `overrides`) under
/// `name`. Returns the template it replaced, if any.
pub fn save_template(
    session: &mut Session,
    name: &str,
    formula: &str,
    overrides: &Inputs,
) -> AppResult<Option<Template>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput(
            "template name must not be empty".to_string(),
        ));
    }

    let descriptor = resolve_formula(formula)?;
    let inputs = resolve_inputs(descriptor, overrides)?;
    Ok(session
        .ledger_mut()
        .save_template(name, descriptor.name(), inputs))
}

/// Calculate with a saved template's inputs (recorded like any calculation).
pub fn apply_template(session: &mut Session, name: &str) -> AppResult<Calculation> {
    let template = session
        .ledger()
        .template(name)
        .cloned()
        .ok_or_else(|| AppError::NotFound {
            what: "Template",
            name: name.to_string(),
        })?;
    calculate(session, &template.formula, &template.inputs)
}

/// Templates whose name or formula contains `filter`, ordered by name.
pub fn list_templates<'s>(session: &'s Session, filter: &str) -> Vec<&'s Template> {
    session.ledger().list_templates(filter)
}

/// Remove a template. Returns `None` when there was nothing to delete.
pub fn delete_template(session: &mut Session, name: &str) -> Option<Template> {
    session.ledger_mut().delete_template(name)
}
