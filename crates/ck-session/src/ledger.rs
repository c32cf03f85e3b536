//! Bounded calculation history plus a template store.

use crate::types::{HistoryEntry, Params, Template, now_timestamp};
use std::collections::{BTreeMap, VecDeque};

/// Most recent calculations kept per session.
pub const HISTORY_CAPACITY: usize = 50;

/// History is newest first and never longer than [`HISTORY_CAPACITY`].
/// Templates are keyed by name, so a save under an existing name replaces it.
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    history: VecDeque<HistoryEntry>,
    templates: BTreeMap<String, Template>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful calculation stamped with the local time.
    pub fn record(&mut self, formula: impl Into<String>, inputs: Params, result: f64) {
        self.record_with_timestamp(now_timestamp(), formula, inputs, result);
    }

    pub fn record_with_timestamp(
        &mut self,
        timestamp: impl Into<String>,
        formula: impl Into<String>,
        inputs: Params,
        result: f64,
    ) {
        self.history.push_front(HistoryEntry {
            timestamp: timestamp.into(),
            formula: formula.into(),
            inputs,
            result,
        });
        self.history.truncate(HISTORY_CAPACITY);
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.front()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop the history. Templates are kept.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Insert or replace a template, returning the one it replaced.
    pub fn save_template(
        &mut self,
        name: impl Into<String>,
        formula: impl Into<String>,
        inputs: Params,
    ) -> Option<Template> {
        let name = name.into();
        let template = Template {
            name: name.clone(),
            formula: formula.into(),
            inputs,
            timestamp: now_timestamp(),
        };
        let previous = self.templates.insert(name, template);
        if let Some(previous) = &previous {
            tracing::info!(name = %previous.name, "template replaced");
        } else {
            tracing::info!(templates = self.templates.len(), "template saved");
        }
        previous
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Templates whose name or formula contains `filter` (ignoring case),
    /// ordered by name.
    pub fn list_templates(&self, filter: &str) -> Vec<&Template> {
        self.templates
            .values()
            .filter(|t| t.matches_filter(filter))
            .collect()
    }

    pub fn num_templates(&self) -> usize {
        self.templates.len()
    }

    /// Remove a template. Unknown names are ignored.
    pub fn delete_template(&mut self, name: &str) -> Option<Template> {
        let removed = self.templates.remove(name);
        if removed.is_some() {
            tracing::info!(name, "template deleted");
        }
        removed
    }
}
