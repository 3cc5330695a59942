//! Identity types for the acting user.
//!
//! WARDEN never inspects a user beyond asking it for a stable identifier,
//! which is written to logs and decision records.

use serde::{Deserialize, Serialize};

/// A user type that can be named in logs and audit records.
pub trait Actor {
    /// Stable identifier for this user, e.g. `"user-17"`.
    fn actor_id(&self) -> String;
}

/// Unique identifier for a single evaluation.
///
/// Every recorded decision carries one, so log lines and audit entries for
/// the same call can be correlated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub uuid::Uuid);

impl EvaluationId {
    /// Create a new, unique evaluation ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
