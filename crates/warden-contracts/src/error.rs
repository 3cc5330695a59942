//! Error types for the WARDEN evaluator.
//!
//! All fallible operations return `GateResult<T>`. Errors raised inside
//! policy handlers travel back to the caller untouched.

use thiserror::Error;

/// The unified error type for the WARDEN crates.
#[derive(Debug, Error)]
pub enum GateError {
    /// An `authorize` call hit a denial.
    #[error("authorization denied: {reason}")]
    Denied { reason: String },

    /// The requested ability is not registered on the policy.
    ///
    /// Only raised when the gate is configured with `missing_ability = "error"`;
    /// the default folds a missing ability into a plain denial.
    #[error("ability '{ability}' is not defined on policy '{policy}'")]
    AbilityNotFound { policy: String, ability: String },

    /// A policy handler failed while deciding.
    #[error("policy handler failed: {reason}")]
    Policy { reason: String },

    /// The host authentication context could not produce the current user.
    #[error("could not resolve current user: {reason}")]
    UserResolution { reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The decision recorder could not persist a record.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

/// Convenience alias used throughout the WARDEN crates.
pub type GateResult<T> = Result<T, GateError>;
