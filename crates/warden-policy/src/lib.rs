//! # warden-policy
//!
//! The TOML-configured authorization gate for WARDEN.
//!
//! ## Overview
//!
//! This crate provides [`Gate`], which resolves the current user through a
//! [`UserProvider`](warden_core::UserProvider), evaluates an ability with the
//! options in a [`GateConfig`], and optionally hands every decision to a
//! [`DecisionRecorder`](warden_core::DecisionRecorder).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use warden_policy::{Gate, GateConfig};
//!
//! let config = GateConfig::from_file(Path::new("policies/gate.toml"))?;
//! let gate = Gate::with_config(Box::new(session), &config);
//! let decision = gate.inspect::<PostPolicy>("update", &post)?;
//! ```

pub mod config;
pub mod gate;

pub use config::GateConfig;
pub use gate::Gate;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use warden_contracts::error::GateError;
    use warden_core::{MissingAbility, GUEST_DENIAL_MESSAGE};

    use crate::GateConfig;

    // ── 1. defaults ───────────────────────────────────────────────────────────

    /// An empty document yields the default options.
    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GateConfig::from_toml_str("").unwrap();

        assert_eq!(config, GateConfig::default());
        assert_eq!(config.guest_denial_message, GUEST_DENIAL_MESSAGE);
        assert_eq!(config.missing_ability, MissingAbility::Deny);
        assert!(config.record_decisions);
    }

    // ── 2. full document ──────────────────────────────────────────────────────

    #[test]
    fn test_all_fields_parse() {
        let toml = r#"
            guest_denial_message = "Sign in to continue"
            missing_ability = "error"
            record_decisions = false
        "#;

        let config = GateConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.guest_denial_message, "Sign in to continue");
        assert_eq!(config.missing_ability, MissingAbility::Error);
        assert!(!config.record_decisions);

        let evaluator = config.evaluator();
        assert_eq!(evaluator.guest_denial_message(), "Sign in to continue");
        assert_eq!(evaluator.missing_ability(), MissingAbility::Error);
    }

    // ── 3. rejected documents ─────────────────────────────────────────────────

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = GateConfig::from_toml_str("cache_decisions = true").unwrap_err();
        match err {
            GateError::ConfigError { reason } => {
                assert!(reason.contains("failed to parse gate TOML"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_missing_ability_mode_is_rejected() {
        let err = GateConfig::from_toml_str(r#"missing_ability = "ignore""#).unwrap_err();
        assert!(matches!(err, GateError::ConfigError { .. }));
    }

    #[test]
    fn test_blank_guest_message_is_rejected() {
        let err = GateConfig::from_toml_str(r#"guest_denial_message = "   ""#).unwrap_err();
        match err {
            GateError::ConfigError { reason } => assert!(reason.contains("must not be empty")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 4. files ──────────────────────────────────────────────────────────────

    #[test]
    fn test_from_file_reads_document() {
        let path = std::env::temp_dir().join(format!("warden-gate-{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, r#"missing_ability = "error""#).unwrap();
        }

        let config = GateConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.missing_ability, MissingAbility::Error);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("warden-definitely-missing.toml");
        let err = GateConfig::from_file(&path).unwrap_err();
        match err {
            GateError::ConfigError { reason } => assert!(reason.contains("failed to read gate config")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
