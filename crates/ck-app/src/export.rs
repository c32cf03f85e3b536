//! CSV export of history, templates and sweeps.
//!
//! Numbers are written in Rust's shortest round-trip form. Parameter columns
//! are the union of keys used by the exported rows, sorted by key, with a
//! blank cell where a row does not use that key.

use crate::error::{AppError, AppResult};
use ck_engine::SweepResult;
use ck_session::{HistoryEntry, Params, Template};
use std::collections::BTreeSet;
use std::path::Path;

/// History rows in the order given (the ledger yields newest first).
pub fn history_csv<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) -> String {
    let entries: Vec<_> = entries.into_iter().collect();
    let keys = union_keys(entries.iter().map(|e| &e.inputs));

    let mut out = String::new();
    push_row(
        &mut out,
        ["timestamp", "formula", "result"]
            .into_iter()
            .map(str::to_string)
            .chain(keys.iter().cloned()),
    );
    for entry in entries {
        push_row(
            &mut out,
            [
                entry.timestamp.clone(),
                entry.formula.clone(),
                entry.result.to_string(),
            ]
            .into_iter()
            .chain(param_cells(&keys, &entry.inputs)),
        );
    }
    out
}

pub fn templates_csv<'a>(templates: impl IntoIterator<Item = &'a Template>) -> String {
    let templates: Vec<_> = templates.into_iter().collect();
    let keys = union_keys(templates.iter().map(|t| &t.inputs));

    let mut out = String::new();
    push_row(
        &mut out,
        ["name", "timestamp", "formula"]
            .into_iter()
            .map(str::to_string)
            .chain(keys.iter().cloned()),
    );
    for template in templates {
        push_row(
            &mut out,
            [
                template.name.clone(),
                template.timestamp.clone(),
                template.formula.clone(),
            ]
            .into_iter()
            .chain(param_cells(&keys, &template.inputs)),
        );
    }
    out
}

/// Two columns headed by the varying parameter's label and the result's
/// label, without units. Undefined samples leave the result cell empty.
pub fn sweep_csv(result: &SweepResult) -> String {
    let mut out = String::new();
    push_row(&mut out, [result.x_name.clone(), result.y_name.clone()]);
    for point in &result.points {
        let y = match &point.y {
            Ok(y) => y.to_string(),
            Err(_) => String::new(),
        };
        push_row(&mut out, [point.x.to_string(), y]);
    }
    out
}

/// Write an export to disk.
pub fn write_export(path: &Path, contents: &str) -> AppResult<()> {
    std::fs::write(path, contents).map_err(|e| AppError::ExportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(())
}

fn union_keys<'a>(rows: impl Iterator<Item = &'a Params>) -> Vec<String> {
    rows.flat_map(|p| p.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn param_cells<'a>(keys: &'a [String], inputs: &'a Params) -> impl Iterator<Item = String> + 'a {
    keys.iter()
        .map(|k| inputs.get(k).map(f64::to_string).unwrap_or_default())
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(&field));
    }
    out.push('\n');
}

/// Quote a field containing a comma, quote or line break; inner quotes are
/// doubled.
fn escape_field(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}
