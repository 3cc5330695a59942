//! The ability evaluator: one decision for one ability and one user.
//!
//! Evaluation order:
//!
//!   Instantiate → Ability lookup → `before` guard → Ability handler → Normalize
//!
//! 1. Build a fresh policy with `Default` and collect its registry.
//! 2. If the ability is not registered, nothing runs. The result is a bare
//!    denial, or `GateError::AbilityNotFound` under `MissingAbility::Error`.
//! 3. Run the `before` guard when the user satisfies its requirement. A set
//!    outcome is final.
//! 4. Run the ability when the user satisfies its requirement; otherwise
//!    deny with the guest denial message.
//! 5. Normalize: `true` allows, `false` and unset deny, a `Decision` passes
//!    through.
//!
//! Errors returned by handlers propagate unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use warden_contracts::{
    actor::Actor,
    decision::{normalize, Decision},
    error::{GateError, GateResult},
    record::{Evaluation, Resolution},
};

use crate::{registry::AbilityRegistry, traits::Policy};

/// Reason attached when a guest reaches an ability that requires a user.
pub const GUEST_DENIAL_MESSAGE: &str = "Not allowed for guest user";

/// What to do when the requested ability is not registered on the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingAbility {
    /// Deny without a message, indistinguishable from a `false` answer.
    #[default]
    Deny,
    /// Fail with `GateError::AbilityNotFound`.
    Error,
}

/// Evaluates abilities with a fixed set of options.
///
/// Holds no per-call state; one evaluator can serve any number of policies
/// and threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    guest_denial_message: String,
    missing_ability: MissingAbility,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            guest_denial_message: GUEST_DENIAL_MESSAGE.to_string(),
            missing_ability: MissingAbility::default(),
        }
    }
}

impl Evaluator {
    pub fn new(guest_denial_message: impl Into<String>, missing_ability: MissingAbility) -> Self {
        Self {
            guest_denial_message: guest_denial_message.into(),
            missing_ability,
        }
    }

    pub fn guest_denial_message(&self) -> &str {
        &self.guest_denial_message
    }

    pub fn missing_ability(&self) -> MissingAbility {
        self.missing_ability
    }

    /// Evaluate `ability` on policy `P` for `user` and return the decision.
    pub fn evaluate<P: Policy>(
        &self,
        ability: &str,
        user: Option<&P::User>,
        args: &P::Args,
    ) -> GateResult<Decision> {
        self.evaluate_traced::<P>(ability, user, args)
            .map(|evaluation| evaluation.decision)
    }

    /// Like `evaluate`, but also report which step produced the decision.
    pub fn evaluate_traced<P: Policy>(
        &self,
        ability: &str,
        user: Option<&P::User>,
        args: &P::Args,
    ) -> GateResult<Evaluation> {
        let policy = P::default();
        let registry = AbilityRegistry::<P>::build();
        let actor = user.map(|u| u.actor_id());
        let actor = actor.as_deref().unwrap_or("guest");

        debug!(policy = P::name(), ability = %ability, actor = %actor, "evaluating ability");

        let Some(handler) = registry.handler(ability) else {
            warn!(policy = P::name(), ability = %ability, "ability not defined on policy");
            return match self.missing_ability {
                MissingAbility::Deny => Ok(Evaluation {
                    decision: normalize(None),
                    resolved_by: Resolution::AbilityMissing,
                }),
                MissingAbility::Error => Err(GateError::AbilityNotFound {
                    policy: P::name().to_string(),
                    ability: ability.to_string(),
                }),
            };
        };

        if let Some(before) = registry.before_hook() {
            if let Some(outcome) = before.invoke(&policy, user, ability).transpose()? {
                if outcome.is_set() {
                    let decision = outcome.into_decision();
                    debug!(
                        policy = P::name(),
                        ability = %ability,
                        actor = %actor,
                        allowed = decision.allowed(),
                        "before guard decided"
                    );
                    return Ok(Evaluation {
                        decision,
                        resolved_by: Resolution::Before,
                    });
                }
            }
        }

        match handler.invoke(&policy, user, args).transpose()? {
            Some(outcome) => {
                let decision = outcome.into_decision();
                debug!(
                    policy = P::name(),
                    ability = %ability,
                    actor = %actor,
                    allowed = decision.allowed(),
                    "ability decided"
                );
                Ok(Evaluation {
                    decision,
                    resolved_by: Resolution::Ability,
                })
            }
            None => {
                warn!(policy = P::name(), ability = %ability, "ability requires an authenticated user");
                Ok(Evaluation {
                    decision: Decision::deny_with(self.guest_denial_message.clone()),
                    resolved_by: Resolution::GuestDenied,
                })
            }
        }
    }
}

/// Evaluate `ability` on `P` with the default evaluator options.
pub fn evaluate<P: Policy>(
    ability: &str,
    user: Option<&P::User>,
    args: &P::Args,
) -> GateResult<Decision> {
    Evaluator::default().evaluate::<P>(ability, user, args)
}
