//! Application services for task creation.

mod creation;
mod outcome;

pub use creation::{
    PersistenceError, TaskCreationError, TaskCreationResult, TaskCreationService,
};
pub use outcome::{
    CreationResponse, TASK_CREATED_MESSAGE, TASK_NOT_CREATED_MESSAGE, TaskCreated,
};
