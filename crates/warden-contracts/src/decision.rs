//! Authorization decisions and raw handler outcomes.
//!
//! A policy handler may answer with a plain `bool`, a structured `Decision`,
//! or nothing at all. `Outcome` captures all three; `Outcome::into_decision`
//! is the single place where they collapse into the canonical `Decision`.

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};

/// The final answer of one ability evaluation.
///
/// Immutable once constructed. Only a denial carries a message; an allow
/// decision never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The user may perform the ability.
    Allow,

    /// The user may not perform the ability.
    Deny {
        /// Optional human-readable reason surfaced to the caller.
        reason: Option<String>,
    },
}

impl Decision {
    /// An allow decision.
    pub fn allow() -> Self {
        Self::Allow
    }

    /// A denial with no message.
    pub fn deny() -> Self {
        Self::Deny { reason: None }
    }

    /// A denial carrying `reason`.
    pub fn deny_with(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: Some(reason.into()),
        }
    }

    pub fn allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn denied(&self) -> bool {
        !self.allowed()
    }

    /// The denial reason, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny { reason } => reason.as_deref(),
        }
    }

    /// Turn a denial into `GateError::Denied`.
    ///
    /// Returns the decision itself when it allows, so callers can chain
    /// `gate.inspect(..)?.authorize()?`.
    pub fn authorize(self) -> GateResult<Self> {
        match self {
            Self::Allow => Ok(self),
            Self::Deny { reason } => Err(GateError::Denied {
                reason: reason.unwrap_or_else(|| "this action is unauthorized".to_string()),
            }),
        }
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::allow()
        } else {
            Self::deny()
        }
    }
}

/// The raw value a `before` guard or ability handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A structured decision; passes through normalization unchanged.
    Decision(Decision),
    /// A plain boolean answer.
    Bool(bool),
    /// No answer.
    Unset,
}

impl Outcome {
    /// Whether the outcome carries an answer.
    ///
    /// A `before` guard only short-circuits evaluation with a set outcome.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Normalize into a `Decision`.
    ///
    /// `true` allows; `false` and `Unset` deny without a message.
    pub fn into_decision(self) -> Decision {
        match self {
            Self::Decision(decision) => decision,
            Self::Bool(allowed) => Decision::from(allowed),
            Self::Unset => Decision::deny(),
        }
    }
}

/// Normalize an outcome that may never have been produced.
pub fn normalize(outcome: Option<Outcome>) -> Decision {
    outcome.unwrap_or(Outcome::Unset).into_decision()
}

impl From<bool> for Outcome {
    fn from(allowed: bool) -> Self {
        Self::Bool(allowed)
    }
}

impl From<Decision> for Outcome {
    fn from(decision: Decision) -> Self {
        Self::Decision(decision)
    }
}

impl<T: Into<Outcome>> From<Option<T>> for Outcome {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}
