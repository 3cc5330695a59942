//! Audit event and log types.
//!
//! `AuditEvent` wraps one `DecisionRecord` with its position in the chain
//! and the hashes that make tampering detectable. `AuditLog` is the sealed
//! export of a whole log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_contracts::record::DecisionRecord;

/// A single entry in the SHA-256 hash chain.
///
/// Modifying any field, including those of the embedded `record`,
/// invalidates `this_hash` and every later `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The decision log this event belongs to.
    pub log_id: String,

    /// The recorded decision.
    pub record: DecisionRecord,

    /// Hash of the previous event, or `GENESIS_HASH` for the first.
    pub prev_hash: String,

    /// Hash of this event, see `hash_event`.
    pub this_hash: String,
}

impl AuditEvent {
    /// The `prev_hash` of the first event in every chain: 64 hex zeros.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed export of a decision log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub log_id: String,

    /// All events in chain order.
    pub events: Vec<AuditEvent>,

    /// Wall-clock time (UTC) of the export.
    pub exported_at: DateTime<Utc>,

    /// `this_hash` of the last event; empty if the log is empty.
    pub terminal_hash: String,
}

impl AuditLog {
    /// Number of recorded decisions that denied.
    pub fn denial_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| event.record.decision.denied())
            .count()
    }
}
