//! # Authentication Session Module
//!
//! This module carries the authentication state the UI layers consult:
//! whether a user is signed in, and whether a given user id is theirs.
//! The recipe model itself never reads it; ownership gates such as
//! journal authoring do.

use serde::{Deserialize, Serialize};

/// Authentication state for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthSession {
    user_id: Option<i64>,
}

impl AuthSession {
    /// Create an unauthenticated session
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Create a session signed in as the given user
    pub fn authenticated(user_id: i64) -> Self {
        Self { user_id: Some(user_id) }
    }

    /// Check whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Check whether the given user id belongs to the signed-in user
    pub fn is_my_id(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }
}
