//! Domain model for task creation.
//!
//! The task domain models the task aggregate, the validated scalar fields it
//! carries, and the read-only status and user entities it references. All
//! infrastructure concerns stay outside the domain boundary.

mod error;
mod fields;
mod ids;
mod status;
mod task;
mod user;

pub use error::TaskDomainError;
pub use fields::{DUE_FORMAT, DueAt, MAX_TITLE_LENGTH, TaskDescription, TaskTitle};
pub use ids::{StatusId, TaskId, UserId};
pub use status::{DEFAULT_STATUS_NAME, DefaultStatusRule, Status, StatusName};
pub use task::{NewTaskData, PersistedTaskData, Task};
pub use user::{AuthenticatedUser, User};
