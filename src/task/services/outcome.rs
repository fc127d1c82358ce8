//! Creation results handed back to the presentation collaborator.

use crate::task::{
    domain::{Status, Task, User},
    services::{TaskCreationError, TaskCreationResult},
    validation::TaskField,
};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Confirmation shown after a task is stored.
pub const TASK_CREATED_MESSAGE: &str = "Task created successfully.";

/// Generic message shown when the environment could not store a task.
pub const TASK_NOT_CREATED_MESSAGE: &str = "The task could not be created. Please try again later.";

/// A freshly stored task together with its resolved relations.
///
/// Serialises as `{"success": <message>, "task": {...}}` with the status and
/// owner embedded in the task object, so callers never need a second fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreated {
    task: Task,
    status: Status,
    owner: User,
}

impl TaskCreated {
    pub(crate) const fn new(task: Task, status: Status, owner: User) -> Self {
        Self {
            task,
            status,
            owner,
        }
    }

    /// Returns the stored task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the task's status.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the task's owner.
    #[must_use]
    pub const fn owner(&self) -> &User {
        &self.owner
    }

    /// Returns the human-readable confirmation.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        TASK_CREATED_MESSAGE
    }

    /// Consumes the result, returning the stored task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}

#[derive(Serialize)]
struct TaskPayload<'a> {
    #[serde(flatten)]
    task: &'a Task,
    status: &'a Status,
    owner: &'a User,
}

#[derive(Serialize)]
struct CreatedPayload<'a> {
    success: &'static str,
    task: TaskPayload<'a>,
}

impl Serialize for TaskCreated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CreatedPayload {
            success: self.message(),
            task: TaskPayload {
                task: &self.task,
                status: &self.status,
                owner: &self.owner,
            },
        }
        .serialize(serializer)
    }
}

/// Presentation-ready outcome of a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreationResponse {
    /// The task was stored.
    Created(TaskCreated),
    /// The input was rejected; messages are keyed by field.
    Rejected {
        /// Messages for each rejected field.
        errors: BTreeMap<TaskField, Vec<String>>,
    },
    /// The environment failed; details stay in the logs.
    Failed {
        /// Generic failure message.
        error: &'static str,
    },
}

impl CreationResponse {
    /// Returns `true` when the task was stored.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

impl From<TaskCreationResult<TaskCreated>> for CreationResponse {
    fn from(result: TaskCreationResult<TaskCreated>) -> Self {
        match result {
            Ok(created) => Self::Created(created),
            Err(TaskCreationError::Validation(err)) => Self::Rejected {
                errors: err.messages(),
            },
            Err(TaskCreationError::Persistence(_)) => Self::Failed {
                error: TASK_NOT_CREATED_MESSAGE,
            },
        }
    }
}
