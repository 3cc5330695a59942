//! Evaluation results and decision records.
//!
//! `Evaluation` is what the evaluator hands back internally: the decision
//! plus which step produced it. `DecisionRecord` is what gets written to the
//! decision log, one per evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{actor::EvaluationId, decision::Decision};

/// Which step of the evaluation produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// The `before` guard answered and short-circuited the ability.
    Before,
    /// The ability handler ran and its outcome was normalized.
    Ability,
    /// The ability requires a user and none was present.
    GuestDenied,
    /// The policy has no ability under the requested name.
    AbilityMissing,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Before => "before",
            Self::Ability => "ability",
            Self::GuestDenied => "guest-denied",
            Self::AbilityMissing => "ability-missing",
        };
        f.write_str(s)
    }
}

/// A decision together with the step that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub decision: Decision,
    pub resolved_by: Resolution,
}

/// An immutable record of one evaluation, written to the decision log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Correlates the record with log lines for the same call.
    pub evaluation_id: EvaluationId,
    /// Name of the policy type that was evaluated.
    pub policy: String,
    /// The ability that was requested.
    pub ability: String,
    /// Identifier of the acting user, `None` for a guest.
    pub actor: Option<String>,
    /// Which step decided.
    pub resolved_by: Resolution,
    /// The final, normalized decision.
    pub decision: Decision,
    /// Wall-clock time the record was created (UTC).
    pub timestamp: DateTime<Utc>,
}
