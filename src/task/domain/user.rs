//! Users as seen by the task core: owners and authenticated callers.

use super::UserId;
use serde::{Deserialize, Serialize};

/// A user record owned by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Identity of the caller, already established by the auth collaborator.
///
/// Creation operations take this explicitly; nothing in the task core reads
/// session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthenticatedUser(UserId);

impl AuthenticatedUser {
    /// Wraps an authenticated user identifier.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self(id)
    }

    /// Returns the authenticated user's identifier.
    #[must_use]
    pub const fn user_id(self) -> UserId {
        self.0
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self(user.id())
    }
}
