//! # warden-ref-blog
//!
//! Blog reference policies for the WARDEN ability evaluator.
//!
//! Demonstrates three scenarios using mock users and posts:
//!
//! 1. **Post Editing** — owner checks on `update` and `delete`, with a
//!    structured denial message.
//! 2. **Guest Access** — abilities that accept a guest versus abilities that
//!    require a signed-in user.
//! 3. **Admin Override** — the `before` guard short-circuiting for admins and
//!    suspended accounts, plus unknown abilities.
//!
//! All data is hardcoded and fictional.

pub mod mock_data;
pub mod policies;
pub mod scenarios;
pub mod session;
