//! Current-user context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided by `App` as `RwSignal<UserContext>` and passed explicitly into
//! identity-aware components such as `ChatCanvas`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the authentication provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: Option<String>,
}

impl User {
    pub fn named(username: impl Into<String>) -> Self {
        Self { username: Some(username.into()) }
    }
}

/// Identity visible to the view layer. `user` is `None` when signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub user: Option<User>,
}

impl UserContext {
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self { user: Some(User::named(username)) }
    }

    /// Raw username, which may be empty.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }

    /// True when a non-empty username is present.
    pub fn can_compose(&self) -> bool {
        self.username().is_some_and(|name| !name.is_empty())
    }
}
