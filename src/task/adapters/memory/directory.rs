//! In-memory status and user directories.
//!
//! Both directories are seeded up front by the embedding application or a
//! test; the task core only reads from them.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{DefaultStatusRule, Status, User, UserId},
    ports::{DirectoryError, DirectoryResult, StatusDirectory, UserDirectory},
};

/// Thread-safe in-memory status taxonomy.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusDirectory {
    statuses: Arc<RwLock<Vec<Status>>>,
}

impl InMemoryStatusDirectory {
    /// Creates an empty taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a taxonomy holding `statuses` in the given order.
    #[must_use]
    pub fn with_statuses(statuses: impl IntoIterator<Item = Status>) -> Self {
        Self {
            statuses: Arc::new(RwLock::new(statuses.into_iter().collect())),
        }
    }

    /// Adds a status to the taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, status: Status) -> DirectoryResult<()> {
        let mut statuses = self.statuses.write().map_err(|err| {
            DirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        statuses.push(status);
        Ok(())
    }
}

#[async_trait]
impl StatusDirectory for InMemoryStatusDirectory {
    async fn find_default(&self, rule: &DefaultStatusRule) -> DirectoryResult<Option<Status>> {
        let statuses = self.statuses.read().map_err(|err| {
            DirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let matches: Vec<&Status> = statuses.iter().filter(|s| rule.selects(s)).collect();
        match matches.as_slice() {
            [] => Ok(None),
            [status] => Ok(Some((*status).clone())),
            many => Err(DirectoryError::AmbiguousDefaultStatus {
                rule: rule.clone(),
                count: many.len(),
            }),
        }
    }
}

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(
                users.into_iter().map(|user| (user.id(), user)).collect(),
            )),
        }
    }

    /// Adds or replaces a user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, user: User) -> DirectoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            DirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        users.insert(user.id(), user);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            DirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.get(&id).cloned())
    }
}
