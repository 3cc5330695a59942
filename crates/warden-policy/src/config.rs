//! Gate configuration schema.
//!
//! A `GateConfig` is deserialized from TOML. Every field is optional; an
//! empty document yields the defaults.
//!
//! ```toml
//! guest_denial_message = "Not allowed for guest user"
//! missing_ability = "deny"    # or "error"
//! record_decisions = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use warden_contracts::error::{GateError, GateResult};
use warden_core::{Evaluator, MissingAbility, GUEST_DENIAL_MESSAGE};

/// Options for a `Gate`, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Reason attached when a guest reaches an ability that needs a user.
    pub guest_denial_message: String,

    /// Behavior when the requested ability is not registered.
    pub missing_ability: MissingAbility,

    /// Whether decisions are written to an attached recorder.
    pub record_decisions: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            guest_denial_message: GUEST_DENIAL_MESSAGE.to_string(),
            missing_ability: MissingAbility::Deny,
            record_decisions: true,
        }
    }
}

impl GateConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `GateError::ConfigError` if the TOML is malformed, names an
    /// unknown field, or sets an empty guest denial message.
    pub fn from_toml_str(s: &str) -> GateResult<Self> {
        let config: GateConfig = toml::from_str(s).map_err(|e| GateError::ConfigError {
            reason: format!("failed to parse gate TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as gate configuration.
    pub fn from_file(path: &Path) -> GateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GateError::ConfigError {
            reason: format!("failed to read gate config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the evaluator these options describe.
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.guest_denial_message.clone(), self.missing_ability)
    }

    fn validate(&self) -> GateResult<()> {
        if self.guest_denial_message.trim().is_empty() {
            return Err(GateError::ConfigError {
                reason: "guest_denial_message must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
