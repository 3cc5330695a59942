//! WARDEN Blog Reference — Demo CLI
//!
//! Runs one or all of the three blog scenarios. Each scenario uses the real
//! gate, evaluator, and decision log wired to mock users and posts.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- post-editing
//!   cargo run -p demo -- guest-access
//!   cargo run -p demo -- --config gate.toml admin-override

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use warden_contracts::error::GateResult;
use warden_policy::GateConfig;
use warden_ref_blog::scenarios::{admin_override, default_config, guest_access, post_editing};

// ── CLI definition ────────────────────────────────────────────────────────────

/// WARDEN — policy ability evaluator blog demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "WARDEN blog reference demo",
    long_about = "Runs WARDEN blog scenarios showing owner checks, guest handling,\n\
                  the before guard, and the hash-chained decision log."
)]
struct Cli {
    /// Gate options TOML. Defaults to the configuration bundled with the
    /// reference crate.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three blog scenarios in sequence.
    RunAll,
    /// Scenario 1: Post Editing (owner checks and structured denials).
    PostEditing,
    /// Scenario 2: Guest Access (optional versus authenticated abilities).
    GuestAccess,
    /// Scenario 3: Admin Override (before guard, unknown abilities, decision log).
    AdminOverride,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every evaluation step.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::RunAll => run_all(&config),
        Command::PostEditing => post_editing::run_scenario(&config),
        Command::GuestAccess => guest_access::run_scenario(&config),
        Command::AdminOverride => admin_override::run_scenario(&config),
    });

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> GateResult<GateConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading gate config");
            GateConfig::from_file(path)
        }
        None => default_config(),
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all(config: &GateConfig) -> GateResult<()> {
    post_editing::run_scenario(config)?;
    guest_access::run_scenario(config)?;
    admin_override::run_scenario(config)?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("WARDEN — Policy Ability Evaluator");
    println!("Blog Reference Demo");
    println!("=================================");
    println!();
    println!("Evaluation order per request:");
    println!("  [1] Resolve the current user from the session (absent = guest)");
    println!("  [2] Look up the ability on the policy; unknown abilities deny");
    println!("  [3] before guard: a non-empty answer is final");
    println!("  [4] Ability handler, or \"Not allowed for guest user\" if it needs a user");
    println!("  [5] Normalize bool / unset / Decision into Allow or Deny");
    println!();
}
