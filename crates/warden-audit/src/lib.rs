//! # warden-audit
//!
//! Append-only, SHA-256 hash-chained decision log for WARDEN.
//!
//! ## Overview
//!
//! Every decision a `Gate` records is wrapped in an `AuditEvent` that links
//! to the previous event via its SHA-256 hash. Changing any recorded
//! decision, even by one byte, breaks the chain and `verify_chain` reports it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use warden_audit::InMemoryDecisionLog;
//!
//! let log = Arc::new(InMemoryDecisionLog::new("request-42"));
//! let gate = Gate::new(Box::new(session)).with_recorder(log.clone());
//!
//! gate.inspect::<PostPolicy>("update", &post)?;
//! assert!(log.verify_integrity());
//! ```

pub mod chain;
pub mod event;
pub mod memory;

pub use chain::{hash_event, verify_chain};
pub use event::{AuditEvent, AuditLog};
pub use memory::InMemoryDecisionLog;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use warden_contracts::{
        actor::EvaluationId,
        decision::Decision,
        record::{DecisionRecord, Resolution},
    };
    use warden_core::DecisionRecorder;

    use super::{AuditEvent, InMemoryDecisionLog};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_record(ability: &str, decision: Decision) -> DecisionRecord {
        DecisionRecord {
            evaluation_id: EvaluationId::new(),
            policy: "PostPolicy".to_string(),
            ability: ability.to_string(),
            actor: Some("user-1".to_string()),
            resolved_by: Resolution::Ability,
            decision,
            timestamp: Utc::now(),
        }
    }

    fn filled_log(log_id: &str) -> InMemoryDecisionLog {
        let log = InMemoryDecisionLog::new(log_id);
        log.record(&make_record("view", Decision::allow())).unwrap();
        log.record(&make_record("update", Decision::deny())).unwrap();
        log.record(&make_record("delete", Decision::deny_with("not the owner"))).unwrap();
        log
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_hash_chain_integrity() {
        let log = filled_log("log-integrity");
        assert_eq!(log.len(), 3);
        assert!(log.verify_integrity(), "chain must be valid after sequential writes");
    }

    /// Flipping a recorded denial into an allow must break the chain.
    #[test]
    fn test_tamper_detection() {
        let log = filled_log("log-tamper");

        {
            let mut state = log.state.lock().unwrap();
            state.events[1].record.decision = Decision::allow();
        }

        assert!(!log.verify_integrity(), "chain must detect a rewritten decision");
    }

    #[test]
    fn test_removed_event_is_detected() {
        let log = filled_log("log-removal");
        let mut exported = log.export_log();
        exported.events.remove(1);

        assert!(!super::verify_chain(&exported.events));
    }

    #[test]
    fn test_genesis_hash() {
        let log = InMemoryDecisionLog::new("log-genesis");
        log.record(&make_record("view", Decision::allow())).unwrap();

        let exported = log.export_log();
        assert_eq!(exported.events[0].prev_hash, AuditEvent::GENESIS_HASH);
    }

    #[test]
    fn test_export_log() {
        let log = filled_log("log-export");
        let exported = log.export_log();

        assert_eq!(exported.log_id, "log-export");
        assert_eq!(exported.events.len(), 3);
        assert_eq!(exported.denial_count(), 2);
        assert_eq!(exported.terminal_hash, exported.events.last().unwrap().this_hash);

        for (idx, event) in exported.events.iter().enumerate() {
            assert_eq!(event.sequence, idx as u64);
        }
    }

    #[test]
    fn test_verify_empty() {
        let log = InMemoryDecisionLog::new("log-empty");
        assert!(log.is_empty());
        assert!(log.verify_integrity());
        assert_eq!(log.export_log().terminal_hash, "");
        assert!(super::verify_chain(&[]));
        log.finalize().unwrap();
    }

    #[test]
    fn test_hash_depends_on_log_id() {
        let record = make_record("view", Decision::allow());
        let a = super::hash_event("log-a", 0, &record, AuditEvent::GENESIS_HASH).unwrap();
        let b = super::hash_event("log-b", 0, &record, AuditEvent::GENESIS_HASH).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }
}
