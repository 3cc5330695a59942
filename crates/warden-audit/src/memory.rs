//! In-memory implementation of `DecisionRecorder`.
//!
//! `InMemoryDecisionLog` keeps all events in a `Vec` behind a `Mutex`, so a
//! single log can be shared by every gate in the process through an `Arc`.
//!
//! Use `export_log()` to obtain a sealed `AuditLog`, and `verify_integrity()`
//! at any time to confirm the chain has not been tampered with in memory.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::info;

use warden_contracts::{
    error::{GateError, GateResult},
    record::DecisionRecord,
};
use warden_core::DecisionRecorder;

use crate::{
    chain::{hash_event, verify_chain},
    event::{AuditEvent, AuditLog},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct InMemoryState {
    /// All events written so far, in append order.
    pub(crate) events: Vec<AuditEvent>,

    /// The next sequence number to assign.
    pub(crate) sequence: u64,

    /// `this_hash` of the last event, or `GENESIS_HASH` before the first.
    pub(crate) last_hash: String,
}

// ── Public log ────────────────────────────────────────────────────────────────

/// An in-memory, append-only decision log backed by a SHA-256 hash chain.
pub struct InMemoryDecisionLog {
    log_id: String,
    pub(crate) state: Mutex<InMemoryState>,
}

impl InMemoryDecisionLog {
    pub fn new(log_id: impl Into<String>) -> Self {
        Self {
            log_id: log_id.into(),
            state: Mutex::new(InMemoryState {
                events: Vec::new(),
                sequence: 0,
                last_hash: AuditEvent::GENESIS_HASH.to_string(),
            }),
        }
    }

    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    /// Export a sealed `AuditLog` containing all events written so far.
    pub fn export_log(&self) -> AuditLog {
        let state = self.read_state();
        let terminal_hash = state
            .events
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        AuditLog {
            log_id: self.log_id.clone(),
            events: state.events.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    pub fn verify_integrity(&self) -> bool {
        verify_chain(&self.read_state().events)
    }

    pub fn len(&self) -> usize {
        self.read_state().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Read-only access survives a poisoned lock; the chain check still
    // reports any half-written state.
    fn read_state(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── DecisionRecorder impl ─────────────────────────────────────────────────────

impl DecisionRecorder for InMemoryDecisionLog {
    /// Append one decision record to the hash chain.
    fn record(&self, record: &DecisionRecord) -> GateResult<()> {
        let mut state = self.state.lock().map_err(|e| GateError::AuditWriteFailed {
            reason: format!("decision log lock poisoned: {}", e),
        })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;
        let this_hash = hash_event(&self.log_id, sequence, record, &prev_hash)?;

        state.events.push(AuditEvent {
            sequence,
            log_id: self.log_id.clone(),
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.sequence += 1;
        state.last_hash = this_hash;

        Ok(())
    }

    /// Log a summary of the chain. There is nothing to flush in memory.
    fn finalize(&self) -> GateResult<()> {
        let state = self.state.lock().map_err(|e| GateError::AuditWriteFailed {
            reason: format!("decision log lock poisoned: {}", e),
        })?;

        info!(
            log_id = %self.log_id,
            event_count = state.events.len(),
            terminal_hash = %state.last_hash,
            "decision log finalized"
        );

        Ok(())
    }
}
