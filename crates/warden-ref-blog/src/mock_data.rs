//! Simulated blog data for the WARDEN reference policies.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! user table and post store of a real application.

use serde::{Deserialize, Serialize};

use warden_contracts::actor::Actor;

// ── Users ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Editor,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub role: Role,
    /// Suspended accounts are refused by every `PostPolicy` ability.
    pub suspended: bool,
}

impl Actor for User {
    fn actor_id(&self) -> String {
        format!("user-{}", self.id)
    }
}

pub const ADMIN_ID: u64 = 1;
pub const EDITOR_ID: u64 = 2;
pub const AUTHOR_ID: u64 = 3;
pub const SUSPENDED_ID: u64 = 4;

/// Look up a user by id.
///
/// | id | name   | role   | suspended |
/// |----|--------|--------|-----------|
/// | 1  | Grace  | admin  | no        |
/// | 2  | Alan   | editor | no        |
/// | 3  | Ada    | author | no        |
/// | 4  | Linus  | author | yes       |
pub fn find_user(id: u64) -> Option<User> {
    let (name, role, suspended) = match id {
        ADMIN_ID => ("Grace", Role::Admin, false),
        EDITOR_ID => ("Alan", Role::Editor, false),
        AUTHOR_ID => ("Ada", Role::Author, false),
        SUSPENDED_ID => ("Linus", Role::Author, true),
        _ => return None,
    };

    Some(User {
        id,
        name: name.to_string(),
        role,
        suspended,
    })
}

// ── Posts ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub owner_id: u64,
    pub title: String,
    pub published: bool,
    /// Locked posts cannot be deleted, even by their author.
    pub locked: bool,
}

/// Ada's published post.
pub fn published_post() -> Post {
    Post {
        id: 10,
        owner_id: AUTHOR_ID,
        title: "Notes on the Analytical Engine".to_string(),
        published: true,
        locked: false,
    }
}

/// Ada's unpublished draft.
pub fn draft_post() -> Post {
    Post {
        id: 11,
        owner_id: AUTHOR_ID,
        title: "Bernoulli numbers, second pass".to_string(),
        published: false,
        locked: false,
    }
}

/// Ada's published post, locked by moderation.
pub fn locked_post() -> Post {
    Post {
        id: 12,
        owner_id: AUTHOR_ID,
        title: "On the Jacquard loom".to_string(),
        published: true,
        locked: true,
    }
}

/// Alan's published post.
pub fn editor_post() -> Post {
    Post {
        id: 20,
        owner_id: EDITOR_ID,
        title: "Computable numbers".to_string(),
        published: true,
        locked: false,
    }
}
