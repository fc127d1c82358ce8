//! Port contracts for task creation.
//!
//! Ports define infrastructure-agnostic interfaces used by task services:
//! task persistence, the read-only status and user directories owned by
//! external collaborators, and input validation.

pub mod directory;
pub mod repository;
pub mod validator;

pub use directory::{DirectoryError, DirectoryResult, StatusDirectory, UserDirectory};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskInputValidator, TaskValidationConfig, ValidationResult};
