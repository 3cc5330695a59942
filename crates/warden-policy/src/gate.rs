//! The host-facing authorization gate.
//!
//! `Gate` binds together the three things an evaluation needs from its
//! surroundings: who the current user is (`UserProvider`), how to evaluate
//! (`Evaluator`, built from `GateConfig`), and where decisions go
//! (`DecisionRecorder`, optional).
//!
//! ```rust,ignore
//! let gate = Gate::with_config(Box::new(session), &config)
//!     .with_recorder(log.clone());
//!
//! gate.authorize::<PostPolicy>("update", &post)?;
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use warden_contracts::{
    actor::{Actor, EvaluationId},
    decision::Decision,
    error::GateResult,
    record::{DecisionRecord, Evaluation},
};
use warden_core::{DecisionRecorder, Evaluator, Policy, UserProvider};

use crate::config::GateConfig;

/// Evaluates abilities for the host's current user.
pub struct Gate<U> {
    users: Box<dyn UserProvider<U>>,
    evaluator: Evaluator,
    recorder: Option<Arc<dyn DecisionRecorder>>,
    record_decisions: bool,
}

impl<U: Actor> Gate<U> {
    /// A gate with default options and no recorder.
    pub fn new(users: Box<dyn UserProvider<U>>) -> Self {
        Self::with_config(users, &GateConfig::default())
    }

    pub fn with_config(users: Box<dyn UserProvider<U>>, config: &GateConfig) -> Self {
        Self {
            users,
            evaluator: config.evaluator(),
            recorder: None,
            record_decisions: config.record_decisions,
        }
    }

    /// Attach a recorder. Ignored when the config disables recording.
    pub fn with_recorder(mut self, recorder: Arc<dyn DecisionRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Evaluate `ability` on `P` for the current user.
    ///
    /// Fails if the user cannot be resolved, a handler fails, or the
    /// decision cannot be recorded.
    pub fn inspect<P>(&self, ability: &str, args: &P::Args) -> GateResult<Decision>
    where
        P: Policy<User = U>,
    {
        let user = self.users.current_user()?;
        self.inspect_for::<P>(user.as_ref(), ability, args)
    }

    /// Evaluate `ability` on `P` for an explicit user instead of the current one.
    pub fn inspect_for<P>(
        &self,
        user: Option<&U>,
        ability: &str,
        args: &P::Args,
    ) -> GateResult<Decision>
    where
        P: Policy<User = U>,
    {
        let evaluation = self.evaluator.evaluate_traced::<P>(ability, user, args)?;
        self.record::<P>(ability, user, &evaluation)?;
        Ok(evaluation.decision)
    }

    pub fn allows<P>(&self, ability: &str, args: &P::Args) -> GateResult<bool>
    where
        P: Policy<User = U>,
    {
        Ok(self.inspect::<P>(ability, args)?.allowed())
    }

    pub fn denies<P>(&self, ability: &str, args: &P::Args) -> GateResult<bool>
    where
        P: Policy<User = U>,
    {
        Ok(self.inspect::<P>(ability, args)?.denied())
    }

    /// Evaluate and fail with `GateError::Denied` unless allowed.
    pub fn authorize<P>(&self, ability: &str, args: &P::Args) -> GateResult<Decision>
    where
        P: Policy<User = U>,
    {
        self.inspect::<P>(ability, args)?.authorize()
    }

    fn record<P: Policy<User = U>>(
        &self,
        ability: &str,
        user: Option<&U>,
        evaluation: &Evaluation,
    ) -> GateResult<()> {
        let recorder = match &self.recorder {
            Some(recorder) if self.record_decisions => recorder,
            _ => return Ok(()),
        };

        let record = DecisionRecord {
            evaluation_id: EvaluationId::new(),
            policy: P::name().to_string(),
            ability: ability.to_string(),
            actor: user.map(|u| u.actor_id()),
            resolved_by: evaluation.resolved_by,
            decision: evaluation.decision.clone(),
            timestamp: Utc::now(),
        };

        debug!(
            evaluation_id = %record.evaluation_id,
            policy = %record.policy,
            ability = %record.ability,
            resolved_by = %record.resolved_by,
            "recording decision"
        );
        recorder.record(&record)?;

        if record.decision.denied() {
            info!(
                evaluation_id = %record.evaluation_id,
                policy = %record.policy,
                ability = %record.ability,
                reason = record.decision.message().unwrap_or(""),
                "ability denied"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use warden_contracts::{
        actor::Actor,
        decision::Decision,
        error::{GateError, GateResult},
        record::{DecisionRecord, Resolution},
    };
    use warden_core::{AbilityRegistry, DecisionRecorder, MissingAbility, Policy, UserProvider};

    use super::Gate;
    use crate::config::GateConfig;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    #[derive(Clone)]
    struct Account {
        name: &'static str,
    }

    impl Actor for Account {
        fn actor_id(&self) -> String {
            self.name.to_string()
        }
    }

    struct FixedSession(Option<Account>);

    impl UserProvider<Account> for FixedSession {
        fn current_user(&self) -> GateResult<Option<Account>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSession;

    impl UserProvider<Account> for BrokenSession {
        fn current_user(&self) -> GateResult<Option<Account>> {
            Err(GateError::UserResolution {
                reason: "session store unreachable".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct CapturingRecorder {
        records: Mutex<Vec<DecisionRecord>>,
    }

    impl DecisionRecorder for CapturingRecorder {
        fn record(&self, record: &DecisionRecord) -> GateResult<()> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn finalize(&self) -> GateResult<()> {
            Ok(())
        }
    }

    struct FailingRecorder;

    impl DecisionRecorder for FailingRecorder {
        fn record(&self, _record: &DecisionRecord) -> GateResult<()> {
            Err(GateError::AuditWriteFailed {
                reason: "disk full".to_string(),
            })
        }

        fn finalize(&self) -> GateResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct InvoicePolicy;

    impl Policy for InvoicePolicy {
        type User = Account;
        type Args = &'static str;

        fn abilities(registry: &mut AbilityRegistry<Self>) {
            registry
                .ability("pay", |_, user, owner| Ok(user.name == *owner))
                .ability_optional("preview", |_, _, _| Ok(true));
        }
    }

    fn signed_in(name: &'static str) -> Box<dyn UserProvider<Account>> {
        Box::new(FixedSession(Some(Account { name })))
    }

    fn guest() -> Box<dyn UserProvider<Account>> {
        Box::new(FixedSession(None))
    }

    // ── Tests ────────────────────────────────────────────────────────────────

    #[test]
    fn inspect_uses_current_user() {
        let gate = Gate::new(signed_in("ada"));
        assert_eq!(gate.inspect::<InvoicePolicy>("pay", &"ada").unwrap(), Decision::Allow);
        assert!(gate.denies::<InvoicePolicy>("pay", &"bob").unwrap());
    }

    #[test]
    fn guest_gets_configured_message() {
        let config = GateConfig {
            guest_denial_message: "log in first".to_string(),
            ..GateConfig::default()
        };
        let gate = Gate::with_config(guest(), &config);

        let decision = gate.inspect::<InvoicePolicy>("pay", &"ada").unwrap();
        assert_eq!(decision.message(), Some("log in first"));
        assert!(gate.allows::<InvoicePolicy>("preview", &"ada").unwrap());
    }

    #[test]
    fn inspect_for_ignores_session() {
        let gate = Gate::new(guest());
        let ada = Account { name: "ada" };
        let decision = gate.inspect_for::<InvoicePolicy>(Some(&ada), "pay", &"ada").unwrap();
        assert!(decision.allowed());
    }

    #[test]
    fn authorize_rejects_denial() {
        let gate = Gate::new(signed_in("bob"));
        let err = gate.authorize::<InvoicePolicy>("pay", &"ada").unwrap_err();
        assert!(matches!(err, GateError::Denied { .. }));
    }

    #[test]
    fn user_resolution_failure_propagates() {
        let gate = Gate::<Account>::new(Box::new(BrokenSession));
        let err = gate.inspect::<InvoicePolicy>("preview", &"ada").unwrap_err();
        assert!(matches!(err, GateError::UserResolution { .. }));
    }

    #[test]
    fn missing_ability_error_mode() {
        let config = GateConfig {
            missing_ability: MissingAbility::Error,
            ..GateConfig::default()
        };
        let gate = Gate::with_config(signed_in("ada"), &config);
        let err = gate.inspect::<InvoicePolicy>("refund", &"ada").unwrap_err();
        assert!(matches!(err, GateError::AbilityNotFound { .. }));
    }

    #[test]
    fn decisions_are_recorded() {
        let recorder = Arc::new(CapturingRecorder::default());
        let gate = Gate::new(guest()).with_recorder(recorder.clone());

        gate.inspect::<InvoicePolicy>("pay", &"ada").unwrap();
        gate.inspect::<InvoicePolicy>("preview", &"ada").unwrap();

        let records = recorder.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].policy, "InvoicePolicy");
        assert_eq!(records[0].actor, None);
        assert_eq!(records[0].resolved_by, Resolution::GuestDenied);
        assert_eq!(records[1].resolved_by, Resolution::Ability);
        assert!(records[1].decision.allowed());
    }

    #[test]
    fn recording_can_be_disabled() {
        let config = GateConfig {
            record_decisions: false,
            ..GateConfig::default()
        };
        let recorder = Arc::new(CapturingRecorder::default());
        let gate = Gate::with_config(signed_in("ada"), &config).with_recorder(recorder.clone());

        gate.inspect::<InvoicePolicy>("pay", &"ada").unwrap();
        assert!(recorder.records.lock().unwrap().is_empty());
    }

    #[test]
    fn recorder_failure_propagates() {
        let gate = Gate::new(signed_in("ada")).with_recorder(Arc::new(FailingRecorder));
        let err = gate.inspect::<InvoicePolicy>("pay", &"ada").unwrap_err();
        assert!(matches!(err, GateError::AuditWriteFailed { .. }));
    }
}
