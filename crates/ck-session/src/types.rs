//! Ledger record types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameter key -> value, as passed to a formula.
pub type Params = BTreeMap<String, f64>;

/// Local wall-clock format used for every ledger timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub formula: String,
    pub inputs: Params,
    pub result: f64,
}

/// A named, reusable set of inputs for one formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub formula: String,
    pub inputs: Params,
    /// When the template was last saved
    pub timestamp: String,
}

impl Template {
    /// Case-insensitive substring match on name or formula name.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        filter.is_empty()
            || self.name.to_lowercase().contains(&filter)
            || self.formula.to_lowercase().contains(&filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn timestamp_parses_back() {
        let ts = now_timestamp();
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok(), "{ts}");
    }

    #[test]
    fn template_filter() {
        let template = Template {
            name: "Water pipe".into(),
            formula: "Reynolds Number".into(),
            inputs: Params::new(),
            timestamp: now_timestamp(),
        };
        assert!(template.matches_filter(""));
        assert!(template.matches_filter("WATER"));
        assert!(template.matches_filter("reynolds"));
        assert!(!template.matches_filter("pump"));
        assert!(!template.matches_filter("  "));
    }

    #[test]
    fn entry_serializes_inputs_in_key_order() {
        let entry = HistoryEntry {
            timestamp: "2024-01-01 12:00:00".into(),
            formula: "LMTD".into(),
            inputs: [("dT2".to_string(), 10.0), ("dT1".to_string(), 30.0)]
                .into_iter()
                .collect(),
            result: 18.2,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.find("dT1").unwrap() < json.find("dT2").unwrap());
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
