//! Scenario 3: Admin Override
//!
//! Demonstrates the `before` guard and the handling of unknown abilities,
//! with every decision written to a hash-chained decision log:
//!
//! Sub-case A — admin deletes an author's locked post → Allow from `before`
//! Sub-case B — suspended author updates own post     → Deny from `before`
//! Sub-case C — unknown ability, default config       → plain Deny
//! Sub-case D — unknown ability, `missing_ability = "error"` → AbilityNotFound

use std::sync::Arc;

use warden_audit::InMemoryDecisionLog;
use warden_contracts::error::{GateError, GateResult};
use warden_core::{DecisionRecorder, MissingAbility};
use warden_policy::GateConfig;

use crate::{
    mock_data::{draft_post, locked_post, ADMIN_ID, SUSPENDED_ID},
    policies::PostPolicy,
};

use super::{describe, gate_for};

/// Run Scenario 3: Admin Override.
pub fn run_scenario(config: &GateConfig) -> GateResult<()> {
    println!("=== Scenario 3: Admin Override ===");
    println!();

    let log = Arc::new(InMemoryDecisionLog::new("admin-override"));

    // ── Sub-case A ───────────────────────────────────────────────────────────
    {
        println!("  Sub-case A: Grace (admin) deletes Ada's locked post");
        let gate = gate_for(Some(ADMIN_ID), config).with_recorder(log.clone());
        let decision = gate.inspect::<PostPolicy>("delete", &locked_post())?;
        println!("  Decision:               {}", describe(&decision));
        println!("  Decided by:             before guard");
        println!();
    }

    // ── Sub-case B ───────────────────────────────────────────────────────────
    {
        println!("  Sub-case B: Linus (suspended) updates his own draft");
        let mut post = draft_post();
        post.owner_id = SUSPENDED_ID;
        let gate = gate_for(Some(SUSPENDED_ID), config).with_recorder(log.clone());
        let decision = gate.inspect::<PostPolicy>("update", &post)?;
        println!("  Decision:               {}", describe(&decision));
        println!();
    }

    // ── Sub-case C ───────────────────────────────────────────────────────────
    {
        println!("  Sub-case C: Grace asks for the undefined ability 'archive'");
        let gate = gate_for(Some(ADMIN_ID), config).with_recorder(log.clone());
        let decision = gate.inspect::<PostPolicy>("archive", &draft_post())?;
        println!("  Decision:               {}", describe(&decision));
        println!("  Note:                   the before guard does not run for unknown abilities");
        println!();
    }

    // ── Sub-case D ───────────────────────────────────────────────────────────
    {
        println!("  Sub-case D: same request with missing_ability = \"error\"");
        let strict = GateConfig {
            missing_ability: MissingAbility::Error,
            ..config.clone()
        };
        let gate = gate_for(Some(ADMIN_ID), &strict).with_recorder(log.clone());
        match gate.inspect::<PostPolicy>("archive", &draft_post()) {
            Err(GateError::AbilityNotFound { policy, ability }) => {
                println!("  Error:                  '{}' is not defined on {}", ability, policy);
            }
            Err(e) => return Err(e),
            Ok(decision) => println!("  Decision:               {}", describe(&decision)),
        }
        println!();
    }

    let exported = log.export_log();
    println!(
        "  Decision log integrity: {} ({} event(s), {} denial(s))",
        if log.verify_integrity() { "VERIFIED" } else { "FAILED" },
        exported.events.len(),
        exported.denial_count()
    );
    if let Some(last) = exported.events.last() {
        let json = serde_json::to_string_pretty(&last.record).map_err(|e| {
            GateError::AuditWriteFailed {
                reason: format!("could not render decision record: {}", e),
            }
        })?;
        println!("  Last record:");
        for line in json.lines() {
            println!("    {}", line);
        }
    }
    log.finalize()?;
    println!();

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
