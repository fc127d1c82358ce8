//! Validation service implementation.
//!
//! Provides the default implementation of the [`TaskInputValidator`] port,
//! running every field rule and collecting all violations.

use crate::task::{
    ports::validator::{TaskInputValidator, TaskValidationConfig, ValidationResult},
    validation::{RawTaskInput, ValidatedTaskInput, ValidationError, rules},
};
use chrono::NaiveDate;

/// Default implementation of the task input validator.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskdesk::task::ports::validator::TaskInputValidator;
/// use taskdesk::task::validation::{DefaultTaskValidator, RawTaskInput, TaskField};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date");
/// let validator = DefaultTaskValidator::new();
///
/// let accepted = RawTaskInput::new()
///     .with("title", "Water the plants")
///     .with("due", "2026-03-14T18:30");
/// assert!(validator.validate(&accepted, today).is_ok());
///
/// let rejected = RawTaskInput::new().with("due", "2026-03-14 18:30");
/// let err = validator.validate(&rejected, today).expect_err("invalid input");
/// assert!(err.has_field(TaskField::Title));
/// assert!(err.has_field(TaskField::Due));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: TaskValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: TaskValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }
}

impl TaskInputValidator for DefaultTaskValidator {
    fn validate(
        &self,
        input: &RawTaskInput,
        today: NaiveDate,
    ) -> ValidationResult<ValidatedTaskInput> {
        let title = rules::validate_title(input, &self.config);
        let description = rules::validate_description(input);
        let due = rules::validate_due(input, today);

        match (title, description, due) {
            (Ok(title), Ok(description), Ok(due)) => {
                Ok(ValidatedTaskInput::new(title, description, due))
            }
            (title, description, due) => Err(ValidationError::collected(
                [title.err(), description.err(), due.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}
