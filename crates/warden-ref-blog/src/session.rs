//! A stand-in for the host application's authentication context.

use tracing::debug;

use warden_contracts::error::{GateError, GateResult};
use warden_core::UserProvider;

use crate::mock_data::{find_user, User};

/// Resolves the signed-in user id of the current request against the mock
/// user table.
#[derive(Debug, Clone, Copy)]
pub struct SessionUserProvider {
    user_id: Option<u64>,
}

impl SessionUserProvider {
    pub fn guest() -> Self {
        Self { user_id: None }
    }

    pub fn signed_in(user_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

impl UserProvider<User> for SessionUserProvider {
    /// A session pointing at an unknown user id is an error, not a guest.
    fn current_user(&self) -> GateResult<Option<User>> {
        let Some(id) = self.user_id else {
            debug!("no user in session");
            return Ok(None);
        };

        find_user(id)
            .map(Some)
            .ok_or_else(|| GateError::UserResolution {
                reason: format!("session refers to unknown user id {}", id),
            })
    }
}

#[cfg(test)]
mod tests {
    use warden_contracts::error::GateError;
    use warden_core::UserProvider;

    use super::SessionUserProvider;
    use crate::mock_data::AUTHOR_ID;

    #[test]
    fn guest_session_has_no_user() {
        assert!(SessionUserProvider::guest().current_user().unwrap().is_none());
    }

    #[test]
    fn signed_in_session_resolves_user() {
        let user = SessionUserProvider::signed_in(AUTHOR_ID)
            .current_user()
            .unwrap()
            .unwrap();
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn unknown_user_id_is_an_error() {
        let err = SessionUserProvider::signed_in(404).current_user().unwrap_err();
        assert!(matches!(err, GateError::UserResolution { .. }));
    }
}
