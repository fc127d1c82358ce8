//! `PostgreSQL` adapters for task persistence and directory lookups.

mod directory;
mod models;
mod pool;
mod repository;
mod schema;

pub use directory::{PostgresStatusDirectory, PostgresUserDirectory};
pub use pool::TaskPgPool;
pub use repository::PostgresTaskRepository;
