//! ck-session: per-session calculation history and saved input templates.
//!
//! Everything here is in-memory and owned by one session; nothing is
//! persisted or shared between sessions.

pub mod ledger;
pub mod types;

pub use ledger::{HISTORY_CAPACITY, SessionLedger};
pub use types::{HistoryEntry, Params, Template, TIMESTAMP_FORMAT, now_timestamp};
