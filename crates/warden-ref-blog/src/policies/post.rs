//! Abilities on a single blog post.
//!
//! | Ability   | Guest?   | Rule                                         |
//! |-----------|----------|----------------------------------------------|
//! | `view`    | accepted | published, or the viewer owns it or edits    |
//! | `update`  | denied   | the user owns the post                       |
//! | `delete`  | denied   | the user owns the post and it is not locked  |
//! | `publish` | denied   | editors only                                 |
//!
//! The `before` guard runs first for signed-in users: admins are allowed
//! everything, suspended accounts are refused everything.

use warden_contracts::{decision::Decision, error::GateResult};
use warden_core::{AbilityRegistry, Policy};

use crate::mock_data::{Post, Role, User};

pub const SUSPENDED_MESSAGE: &str = "Your account is suspended";
pub const LOCKED_MESSAGE: &str = "Locked posts cannot be deleted";

#[derive(Debug, Default)]
pub struct PostPolicy;

impl PostPolicy {
    fn before(&self, user: &User, _ability: &str) -> GateResult<Option<Decision>> {
        if user.suspended {
            return Ok(Some(Decision::deny_with(SUSPENDED_MESSAGE)));
        }
        if user.role == Role::Admin {
            return Ok(Some(Decision::allow()));
        }
        Ok(None)
    }

    fn view(&self, user: Option<&User>, post: &Post) -> GateResult<bool> {
        Ok(post.published
            || user.is_some_and(|u| u.id == post.owner_id || u.role == Role::Editor))
    }

    fn update(&self, user: &User, post: &Post) -> GateResult<bool> {
        Ok(user.id == post.owner_id)
    }

    fn delete(&self, user: &User, post: &Post) -> GateResult<Decision> {
        if post.locked {
            return Ok(Decision::deny_with(LOCKED_MESSAGE));
        }
        Ok(Decision::from(user.id == post.owner_id))
    }

    fn publish(&self, user: &User, _post: &Post) -> GateResult<bool> {
        Ok(user.role == Role::Editor)
    }
}

impl Policy for PostPolicy {
    type User = User;
    type Args = Post;

    fn abilities(registry: &mut AbilityRegistry<Self>) {
        registry
            .before(Self::before)
            .ability_optional("view", Self::view)
            .ability("update", Self::update)
            .ability("delete", Self::delete)
            .ability("publish", Self::publish);
    }
}

#[cfg(test)]
mod tests {
    use warden_contracts::decision::Decision;
    use warden_core::{evaluate, AbilityRegistry, UserRequirement, GUEST_DENIAL_MESSAGE};

    use super::{PostPolicy, LOCKED_MESSAGE, SUSPENDED_MESSAGE};
    use crate::mock_data::{
        draft_post, editor_post, find_user, locked_post, published_post, User, ADMIN_ID,
        AUTHOR_ID, EDITOR_ID, SUSPENDED_ID,
    };

    fn user(id: u64) -> User {
        find_user(id).unwrap()
    }

    #[test]
    fn registry_declares_guest_access_per_ability() {
        let registry = AbilityRegistry::<PostPolicy>::build();
        assert_eq!(registry.requirement("view"), Some(UserRequirement::Optional));
        assert_eq!(registry.requirement("update"), Some(UserRequirement::Authenticated));
        assert_eq!(registry.before_requirement(), Some(UserRequirement::Authenticated));
    }

    #[test]
    fn owner_may_update_own_post() {
        let decision = evaluate::<PostPolicy>("update", Some(&user(AUTHOR_ID)), &draft_post()).unwrap();
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn other_author_may_not_update() {
        let decision = evaluate::<PostPolicy>("update", Some(&user(AUTHOR_ID)), &editor_post()).unwrap();
        assert_eq!(decision, Decision::deny());
    }

    #[test]
    fn guest_may_not_update() {
        let decision = evaluate::<PostPolicy>("update", None, &published_post()).unwrap();
        assert_eq!(decision.message(), Some(GUEST_DENIAL_MESSAGE));
    }

    #[test]
    fn guest_sees_only_published_posts() {
        assert!(evaluate::<PostPolicy>("view", None, &published_post()).unwrap().allowed());
        assert!(evaluate::<PostPolicy>("view", None, &draft_post()).unwrap().denied());
    }

    #[test]
    fn editor_sees_drafts() {
        let decision = evaluate::<PostPolicy>("view", Some(&user(EDITOR_ID)), &draft_post()).unwrap();
        assert!(decision.allowed());
    }

    #[test]
    fn locked_post_cannot_be_deleted_by_owner() {
        let decision = evaluate::<PostPolicy>("delete", Some(&user(AUTHOR_ID)), &locked_post()).unwrap();
        assert_eq!(decision.message(), Some(LOCKED_MESSAGE));
    }

    #[test]
    fn admin_bypasses_every_ability() {
        let admin = user(ADMIN_ID);
        for ability in ["update", "delete", "publish"] {
            let decision = evaluate::<PostPolicy>(ability, Some(&admin), &locked_post()).unwrap();
            assert!(decision.allowed(), "admin should be allowed to {ability}");
        }
    }

    #[test]
    fn suspended_owner_is_refused() {
        let mut own_post = draft_post();
        own_post.owner_id = SUSPENDED_ID;
        let decision = evaluate::<PostPolicy>("update", Some(&user(SUSPENDED_ID)), &own_post).unwrap();
        assert_eq!(decision.message(), Some(SUSPENDED_MESSAGE));
    }

    #[test]
    fn only_editors_publish() {
        assert!(evaluate::<PostPolicy>("publish", Some(&user(EDITOR_ID)), &draft_post()).unwrap().allowed());
        assert!(evaluate::<PostPolicy>("publish", Some(&user(AUTHOR_ID)), &draft_post()).unwrap().denied());
    }
}
