//! Scenario 1: Post Editing
//!
//! An author signs in and works on posts:
//!
//! Sub-case A — update own post          → Allow (`true` from `update`)
//! Sub-case B — update someone else's    → Deny, no message (`false`)
//! Sub-case C — delete own locked post   → Deny with the policy's message
//! Sub-case D — `authorize` on sub-case B → `GateError::Denied`

use warden_contracts::error::{GateError, GateResult};
use warden_policy::GateConfig;

use crate::{
    mock_data::{editor_post, locked_post, published_post, AUTHOR_ID},
    policies::PostPolicy,
};

use super::{describe, gate_for};

/// Run Scenario 1: Post Editing.
pub fn run_scenario(config: &GateConfig) -> GateResult<()> {
    println!("=== Scenario 1: Post Editing ===");
    println!();

    let gate = gate_for(Some(AUTHOR_ID), config);

    // ── Sub-case A ───────────────────────────────────────────────────────────
    {
        let post = published_post();
        println!("  Sub-case A: Ada updates her own post #{} \"{}\"", post.id, post.title);
        let decision = gate.inspect::<PostPolicy>("update", &post)?;
        println!("  Decision:               {}", describe(&decision));
        println!();
    }

    // ── Sub-case B ───────────────────────────────────────────────────────────
    {
        let post = editor_post();
        println!("  Sub-case B: Ada updates Alan's post #{}", post.id);
        let decision = gate.inspect::<PostPolicy>("update", &post)?;
        println!("  Decision:               {}", describe(&decision));
        println!();
    }

    // ── Sub-case C ───────────────────────────────────────────────────────────
    {
        let post = locked_post();
        println!("  Sub-case C: Ada deletes her locked post #{}", post.id);
        let decision = gate.inspect::<PostPolicy>("delete", &post)?;
        println!("  Decision:               {}", describe(&decision));
        println!();
    }

    // ── Sub-case D ───────────────────────────────────────────────────────────
    {
        println!("  Sub-case D: authorize() Ada updating Alan's post");
        match gate.authorize::<PostPolicy>("update", &editor_post()) {
            Err(GateError::Denied { reason }) => {
                println!("  authorize():            rejected ({})", reason);
            }
            Err(e) => return Err(e),
            Ok(_) => println!("  authorize():            unexpectedly allowed"),
        }
        println!();
    }

    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
