//! Repository port for task persistence.

use crate::task::domain::{StatusId, Task, TaskId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task in a single atomic write.
    ///
    /// Returns the task as the store recorded it, which may differ from the
    /// input where the backend narrows values such as timestamp precision.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists, [`TaskRepositoryError::UnknownStatus`] or
    /// [`TaskRepositoryError::UnknownOwner`] when the store enforces foreign
    /// references that do not resolve, or
    /// [`TaskRepositoryError::Persistence`] for storage failures.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The referenced status does not exist in the store.
    #[error("task references unknown status: {0}")]
    UnknownStatus(StatusId),

    /// The referenced owner does not exist in the store.
    #[error("task references unknown owner: {0}")]
    UnknownOwner(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
