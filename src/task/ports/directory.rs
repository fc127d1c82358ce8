//! Read-only directory ports for the status taxonomy and user records.
//!
//! Both directories are owned by external collaborators; the task core only
//! looks entries up and never creates or mutates them.

use crate::task::domain::{DefaultStatusRule, Status, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Status taxonomy lookups.
#[async_trait]
pub trait StatusDirectory: Send + Sync {
    /// Resolves the status selected by `rule`.
    ///
    /// Returns `None` when no status matches, for example when the taxonomy
    /// has not been seeded.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::AmbiguousDefaultStatus`] when more than one
    /// status matches the rule, or [`DirectoryError::Persistence`] when the
    /// lookup fails.
    async fn find_default(&self, rule: &DefaultStatusRule) -> DirectoryResult<Option<Status>>;
}

/// User record lookups.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the lookup fails.
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// More than one status satisfies the default-status rule.
    #[error("{count} statuses match the default status rule ({rule})")]
    AmbiguousDefaultStatus {
        /// The rule that matched several statuses.
        rule: DefaultStatusRule,
        /// How many statuses matched.
        count: usize,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
