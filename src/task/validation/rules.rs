//! Individual field rules for task input.
//!
//! Each rule is a pure function over the raw input. Rules return the
//! normalised field value on success or the [`FieldViolation`] describing
//! why the field was rejected.

use crate::task::{
    domain::{DueAt, TaskDescription, TaskDomainError, TaskTitle},
    ports::validator::TaskValidationConfig,
    validation::{FieldViolation, RawTaskInput, TaskField},
};
use chrono::NaiveDate;
use serde_json::Value;

/// Validates the required `title` field.
///
/// # Errors
///
/// Returns [`FieldViolation::TitleMissing`] for an absent or blank title,
/// [`FieldViolation::TitleNotString`] for a non-string value, or
/// [`FieldViolation::TitleTooLong`] when it exceeds the configured limit.
pub fn validate_title(
    input: &RawTaskInput,
    config: &TaskValidationConfig,
) -> Result<TaskTitle, FieldViolation> {
    let raw = match input.get(TaskField::Title.as_str()) {
        None => return Err(FieldViolation::TitleMissing),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(FieldViolation::TitleNotString),
    };

    TaskTitle::with_max_length(raw.as_str(), config.max_title_length).map_err(|err| match err {
        TaskDomainError::EmptyTitle => FieldViolation::TitleMissing,
        TaskDomainError::TitleTooLong { max, actual } => {
            FieldViolation::TitleTooLong { max, actual }
        }
        // Title construction never yields these.
        TaskDomainError::EmptyStatusName | TaskDomainError::MalformedDue(_) => {
            FieldViolation::TitleMissing
        }
    })
}

/// Validates the optional `description` field.
///
/// Absent, null and blank descriptions all normalise to `None`.
///
/// # Errors
///
/// Returns [`FieldViolation::DescriptionNotString`] when a non-null value is
/// not a string.
pub fn validate_description(
    input: &RawTaskInput,
) -> Result<Option<TaskDescription>, FieldViolation> {
    match input.get(TaskField::Description.as_str()) {
        None => Ok(None),
        Some(Value::String(raw)) => Ok(TaskDescription::new(raw.as_str())),
        Some(_) => Err(FieldViolation::DescriptionNotString),
    }
}

/// Validates the required `due` field against the strict format and `today`.
///
/// # Errors
///
/// Returns [`FieldViolation::DueMissing`] or [`FieldViolation::DueNotString`]
/// for absent or non-string values, [`FieldViolation::DueMalformed`] when the
/// format does not match, or [`FieldViolation::DueInPast`] when the date is
/// before `today`.
pub fn validate_due(input: &RawTaskInput, today: NaiveDate) -> Result<DueAt, FieldViolation> {
    let raw = match input.get(TaskField::Due.as_str()) {
        None => return Err(FieldViolation::DueMissing),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(FieldViolation::DueNotString),
    };

    let due = DueAt::parse(raw).map_err(|_| FieldViolation::DueMalformed(raw.clone()))?;
    if due.is_before_day(today) {
        return Err(FieldViolation::DueInPast { due, today });
    }
    Ok(due)
}
