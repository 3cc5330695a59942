//! Scenario 2: Guest Access
//!
//! Nobody is signed in. Abilities registered with `ability_optional` still
//! run and decide for themselves; abilities registered with `ability` are
//! refused with the configured guest message before their handler runs.

use warden_contracts::error::GateResult;
use warden_policy::GateConfig;

use crate::{
    mock_data::{draft_post, published_post},
    policies::{PostPolicy, ReportPolicy},
};

use super::{describe, gate_for};

/// Run Scenario 2: Guest Access.
pub fn run_scenario(config: &GateConfig) -> GateResult<()> {
    println!("=== Scenario 2: Guest Access ===");
    println!();

    let gate = gate_for(None, config);

    let cases = [
        ("PostPolicy::view (published)", gate.inspect::<PostPolicy>("view", &published_post())?),
        ("PostPolicy::view (draft)", gate.inspect::<PostPolicy>("view", &draft_post())?),
        ("PostPolicy::update", gate.inspect::<PostPolicy>("update", &published_post())?),
        ("ReportPolicy::summary", gate.inspect::<ReportPolicy>("summary", &())?),
        ("ReportPolicy::export", gate.inspect::<ReportPolicy>("export", &())?),
    ];

    for (label, decision) in &cases {
        println!("  {:<30} {}", label, describe(decision));
    }
    println!();

    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
