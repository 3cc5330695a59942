//! # warden-contracts
//!
//! Shared types for the WARDEN ability evaluator.
//!
//! All crates in the workspace import from here. No evaluation logic lives in
//! this crate, only data definitions, the outcome normalization rule, and
//! error types.

pub mod actor;
pub mod decision;
pub mod error;
pub mod record;
