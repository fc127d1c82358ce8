//! Validator port for task input.
//!
//! Defines the abstract interface for checking raw task input before any
//! entity is built.

use crate::task::{
    domain::MAX_TITLE_LENGTH,
    validation::{RawTaskInput, ValidatedTaskInput, ValidationError},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for task input validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect every field violation before returning (not fail-fast)
/// - Read no external state other than the supplied `today`
/// - Be stateless and thread-safe
pub trait TaskInputValidator: Send + Sync {
    /// Validates raw input, returning only the accepted fields.
    ///
    /// `today` is the current calendar date; due values on earlier dates
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] holding one violation per rejected field.
    fn validate(
        &self,
        input: &RawTaskInput,
        today: NaiveDate,
    ) -> ValidationResult<ValidatedTaskInput>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use taskdesk::task::ports::validator::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.max_title_length, 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskValidationConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,
}

impl TaskValidationConfig {
    /// Creates a configuration with a custom title limit.
    #[must_use]
    pub const fn with_max_title_length(max_title_length: usize) -> Self {
        Self { max_title_length }
    }
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self::with_max_title_length(MAX_TITLE_LENGTH)
    }
}
