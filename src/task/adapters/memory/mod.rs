//! In-memory adapters for task creation.

mod directory;
mod task;

pub use directory::{InMemoryStatusDirectory, InMemoryUserDirectory};
pub use task::InMemoryTaskRepository;
