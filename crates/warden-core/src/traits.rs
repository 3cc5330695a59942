//! Core trait definitions for WARDEN.
//!
//! These three traits are the seams between the evaluator and its host:
//!
//! - `Policy`           — groups the abilities for one kind of resource
//! - `UserProvider`     — the host's authentication context
//! - `DecisionRecorder` — optional sink for every decision made
//!
//! The evaluator only ever sees a policy through the handlers it registers,
//! so no runtime introspection of method signatures is needed.

use warden_contracts::{actor::Actor, error::GateResult, record::DecisionRecord};

use crate::registry::AbilityRegistry;

/// A group of named abilities guarding one kind of resource.
///
/// A fresh instance is built with `Default` for every evaluation, then asked
/// to register its handlers. Whether a handler requires an authenticated user
/// is fixed by the registration form it uses.
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct PostPolicy;
///
/// impl Policy for PostPolicy {
///     type User = User;
///     type Args = Post;
///
///     fn abilities(registry: &mut AbilityRegistry<Self>) {
///         registry.ability("update", |_, user, post| Ok(user.id == post.owner_id));
///         registry.ability_optional("view", |_, _, post| Ok(post.published));
///     }
/// }
/// ```
pub trait Policy: Default + Sized + 'static {
    /// The acting user type supplied by the host.
    type User: Actor;

    /// The arguments every ability of this policy receives after the user.
    type Args;

    /// Name used in logs, errors, and decision records.
    ///
    /// Defaults to the unqualified type name.
    fn name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Register the `before` guard and ability handlers for this policy.
    fn abilities(registry: &mut AbilityRegistry<Self>);
}

/// The host's authentication context.
///
/// Returns `Ok(None)` for a guest. An `Err` means the user could not be
/// determined at all and aborts the evaluation.
pub trait UserProvider<U>: Send + Sync {
    fn current_user(&self) -> GateResult<Option<U>>;
}

/// A sink for decision records.
///
/// Implementations should treat `record` as append-only. A failed write is
/// reported to the caller of the gate.
pub trait DecisionRecorder: Send + Sync {
    /// Append one decision record.
    fn record(&self, record: &DecisionRecord) -> GateResult<()>;

    /// Flush or seal the log. Called by the host when it is done recording.
    fn finalize(&self) -> GateResult<()>;
}
