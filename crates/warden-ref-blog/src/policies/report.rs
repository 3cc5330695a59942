//! Abilities on the site-wide traffic report. None of them take arguments.

use warden_contracts::{decision::Decision, error::GateResult};
use warden_core::{AbilityRegistry, Policy};

use crate::mock_data::{Role, User};

pub const EXPORT_MESSAGE: &str = "Report exports are limited to editors";

#[derive(Debug, Default)]
pub struct ReportPolicy;

impl Policy for ReportPolicy {
    type User = User;
    type Args = ();

    fn abilities(registry: &mut AbilityRegistry<Self>) {
        registry
            .ability_optional("summary", |_, _, _| Ok(true))
            .ability("export", |_, user: &User, _| -> GateResult<Decision> {
                Ok(match user.role {
                    Role::Admin | Role::Editor => Decision::allow(),
                    Role::Author => Decision::deny_with(EXPORT_MESSAGE),
                })
            });
    }
}
