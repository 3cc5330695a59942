//! The ability registry: typed handlers keyed by ability name.
//!
//! A policy describes itself by registering handlers here. Each handler is
//! registered in one of two forms, and the form decides whether a guest may
//! reach it:
//!
//! | Form                   | User parameter       | Guest call               |
//! |------------------------|----------------------|--------------------------|
//! | `ability` / `before`   | `&User`              | never invoked            |
//! | `*_optional`           | `Option<&User>`      | invoked with `None`      |

use std::collections::BTreeMap;

use tracing::warn;

use warden_contracts::{decision::Outcome, error::GateResult};

use crate::traits::Policy;

/// Whether a handler needs an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRequirement {
    /// The handler takes `&User`; a guest is denied before it runs.
    Authenticated,
    /// The handler takes `Option<&User>` and decides for guests itself.
    Optional,
}

impl UserRequirement {
    pub fn accepts_guest(self) -> bool {
        matches!(self, Self::Optional)
    }
}

/// A registered handler taking the policy, the user, and an argument `A`.
pub(crate) enum Handler<P: Policy, A: ?Sized> {
    Authenticated(Box<dyn Fn(&P, &P::User, &A) -> GateResult<Outcome>>),
    Optional(Box<dyn Fn(&P, Option<&P::User>, &A) -> GateResult<Outcome>>),
}

impl<P: Policy, A: ?Sized> Handler<P, A> {
    pub(crate) fn requirement(&self) -> UserRequirement {
        match self {
            Self::Authenticated(_) => UserRequirement::Authenticated,
            Self::Optional(_) => UserRequirement::Optional,
        }
    }

    /// Invoke the handler if `user` satisfies its requirement.
    ///
    /// Returns `None` when the handler needs a user and there is none; the
    /// handler is not called in that case.
    pub(crate) fn invoke(
        &self,
        policy: &P,
        user: Option<&P::User>,
        arg: &A,
    ) -> Option<GateResult<Outcome>> {
        match (self, user) {
            (Self::Authenticated(f), Some(user)) => Some(f(policy, user, arg)),
            (Self::Authenticated(_), None) => None,
            (Self::Optional(f), user) => Some(f(policy, user, arg)),
        }
    }
}

/// The `before` guard and named abilities of one policy.
pub struct AbilityRegistry<P: Policy> {
    before: Option<Handler<P, str>>,
    abilities: BTreeMap<String, Handler<P, P::Args>>,
}

impl<P: Policy> AbilityRegistry<P> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            before: None,
            abilities: BTreeMap::new(),
        }
    }

    /// Build the registry `P` describes via `Policy::abilities`.
    pub fn build() -> Self {
        let mut registry = Self::new();
        P::abilities(&mut registry);
        registry
    }

    /// Register an ability that requires an authenticated user.
    pub fn ability<F, O>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&P, &P::User, &P::Args) -> GateResult<O> + 'static,
        O: Into<Outcome>,
    {
        let wrapped = move |policy: &P, user: &P::User, args: &P::Args| -> GateResult<Outcome> {
            handler(policy, user, args).map(Into::into)
        };
        self.insert(name.into(), Handler::Authenticated(Box::new(wrapped)))
    }

    /// Register an ability that also answers for guests.
    pub fn ability_optional<F, O>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&P, Option<&P::User>, &P::Args) -> GateResult<O> + 'static,
        O: Into<Outcome>,
    {
        let wrapped =
            move |policy: &P, user: Option<&P::User>, args: &P::Args| -> GateResult<Outcome> {
                handler(policy, user, args).map(Into::into)
            };
        self.insert(name.into(), Handler::Optional(Box::new(wrapped)))
    }

    /// Register the `before` guard, skipped for guests.
    ///
    /// The guard receives the requested ability name. Returning `Ok(None)`
    /// lets evaluation continue to the ability itself.
    pub fn before<F, O>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&P, &P::User, &str) -> GateResult<Option<O>> + 'static,
        O: Into<Outcome>,
    {
        let wrapped = move |policy: &P, user: &P::User, ability: &str| -> GateResult<Outcome> {
            handler(policy, user, ability).map(Into::into)
        };
        self.set_before(Handler::Authenticated(Box::new(wrapped)))
    }

    /// Register the `before` guard, also run for guests.
    pub fn before_optional<F, O>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&P, Option<&P::User>, &str) -> GateResult<Option<O>> + 'static,
        O: Into<Outcome>,
    {
        let wrapped =
            move |policy: &P, user: Option<&P::User>, ability: &str| -> GateResult<Outcome> {
                handler(policy, user, ability).map(Into::into)
            };
        self.set_before(Handler::Optional(Box::new(wrapped)))
    }

    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    pub fn has_before(&self) -> bool {
        self.before.is_some()
    }

    /// The user requirement of the named ability, if it exists.
    pub fn requirement(&self, name: &str) -> Option<UserRequirement> {
        self.abilities.get(name).map(Handler::requirement)
    }

    /// The user requirement of the `before` guard, if one is registered.
    pub fn before_requirement(&self) -> Option<UserRequirement> {
        self.before.as_ref().map(Handler::requirement)
    }

    /// Registered ability names in sorted order.
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.keys().map(String::as_str)
    }

    pub(crate) fn handler(&self, name: &str) -> Option<&Handler<P, P::Args>> {
        self.abilities.get(name)
    }

    pub(crate) fn before_hook(&self) -> Option<&Handler<P, str>> {
        self.before.as_ref()
    }

    fn insert(&mut self, name: String, handler: Handler<P, P::Args>) -> &mut Self {
        if self.abilities.contains_key(&name) {
            warn!(policy = P::name(), ability = %name, "ability registered twice; keeping the later handler");
        }
        self.abilities.insert(name, handler);
        self
    }

    fn set_before(&mut self, handler: Handler<P, str>) -> &mut Self {
        if self.before.is_some() {
            warn!(policy = P::name(), "before guard registered twice; keeping the later handler");
        }
        self.before = Some(handler);
        self
    }
}

impl<P: Policy> Default for AbilityRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
