//! # warden-core
//!
//! The typed ability evaluator for WARDEN.
//!
//! This crate provides:
//! - The three host-facing traits (`Policy`, `UserProvider`, `DecisionRecorder`)
//! - The `AbilityRegistry` policies register their handlers into
//! - The `Evaluator` that turns one ability request into one `Decision`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warden_core::evaluate;
//!
//! let decision = evaluate::<PostPolicy>("update", Some(&user), &post)?;
//! ```

pub mod evaluator;
pub mod registry;
pub mod traits;

pub use evaluator::{evaluate, Evaluator, MissingAbility, GUEST_DENIAL_MESSAGE};
pub use registry::{AbilityRegistry, UserRequirement};
pub use traits::{DecisionRecorder, Policy, UserProvider};
