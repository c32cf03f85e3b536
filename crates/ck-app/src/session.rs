//! Per-session state passed explicitly to the service calls.

use crate::config::AppConfig;
use ck_session::SessionLedger;

/// One user's session: its configuration and its ledger.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: AppConfig,
    ledger: SessionLedger,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ledger: SessionLedger::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut SessionLedger {
        &mut self.ledger
    }

    /// Format a value with the configured precision.
    pub fn format_value(&self, value: f64) -> String {
        ck_core::format_fixed(value, self.config.precision)
    }
}
