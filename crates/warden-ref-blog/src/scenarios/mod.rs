//! Blog reference scenarios.
//!
//! Each scenario is a self-contained module that wires a real `Gate` to the
//! mock session and data, prints what it observes, and returns an error only
//! when the gate itself fails.

pub mod admin_override;
pub mod guest_access;
pub mod post_editing;

use warden_contracts::{decision::Decision, error::GateResult};
use warden_policy::{Gate, GateConfig};

use crate::{mock_data::User, session::SessionUserProvider};

/// Gate options shipped with the reference crate.
const GATE_CONFIG: &str = include_str!("../../policies/gate.toml");

/// Parse the bundled gate configuration.
pub fn default_config() -> GateResult<GateConfig> {
    GateConfig::from_toml_str(GATE_CONFIG)
}

/// A gate whose current user is `user_id`, or a guest for `None`.
pub(crate) fn gate_for(user_id: Option<u64>, config: &GateConfig) -> Gate<User> {
    let session = match user_id {
        Some(id) => SessionUserProvider::signed_in(id),
        None => SessionUserProvider::guest(),
    };
    Gate::with_config(Box::new(session), config)
}

/// One-line rendering of a decision for scenario output.
pub(crate) fn describe(decision: &Decision) -> String {
    match decision.message() {
        _ if decision.allowed() => "ALLOW".to_string(),
        Some(reason) => format!("DENY ({})", reason),
        None => "DENY".to_string(),
    }
}
