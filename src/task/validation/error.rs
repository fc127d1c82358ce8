//! Field-keyed validation errors for task input.

use crate::task::domain::DueAt;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Input fields checked by the task validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// The `title` key.
    Title,
    /// The `description` key.
    Description,
    /// The `due` key.
    Due,
}

impl TaskField {
    /// Returns the input key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Due => "due",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldViolation {
    /// The title is absent, null, or blank.
    #[error("The title field is required.")]
    TitleMissing,

    /// The title is present but not a string.
    #[error("The title field must be a string.")]
    TitleNotString,

    /// The title exceeds the configured character limit.
    #[error("The title field must not be greater than {max} characters.")]
    TitleTooLong {
        /// The maximum allowed number of characters.
        max: usize,
        /// The actual number of characters.
        actual: usize,
    },

    /// The description is present, non-null, and not a string.
    #[error("The description field must be a string.")]
    DescriptionNotString,

    /// The due value is absent or null.
    #[error("The due field is required.")]
    DueMissing,

    /// The due value is present but not a string.
    #[error("The due field must be a string.")]
    DueNotString,

    /// The due value does not match `YYYY-MM-DDTHH:mm`.
    #[error("The due field must match the format YYYY-MM-DDTHH:mm.")]
    DueMalformed(String),

    /// The due date falls on a day before the current one.
    #[error("The due field must be a date after or equal to today.")]
    DueInPast {
        /// The rejected due value.
        due: DueAt,
        /// The current date at validation time.
        today: NaiveDate,
    },
}

impl FieldViolation {
    /// Returns the field this violation is reported against.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::TitleMissing | Self::TitleNotString | Self::TitleTooLong { .. } => {
                TaskField::Title
            }
            Self::DescriptionNotString => TaskField::Description,
            Self::DueMissing
            | Self::DueNotString
            | Self::DueMalformed(_)
            | Self::DueInPast { .. } => TaskField::Due,
        }
    }
}

/// Rejected task input: one or more field violations.
///
/// A `ValidationError` is never empty; use [`ValidationError::from_violations`]
/// to build one from a collected list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task input: {}", format_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{}: {violation}", violation.field()))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Wraps collected violations, returning `None` when there are none.
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            return None;
        }
        Some(Self { violations })
    }

    /// Wraps violations already known to be non-empty.
    pub(crate) const fn collected(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Creates an error holding a single violation.
    #[must_use]
    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Returns all violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns `true` when at least one violation concerns `field`.
    #[must_use]
    pub fn has_field(&self, field: TaskField) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }

    /// Returns the messages grouped by field, in field order.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<TaskField, Vec<String>> {
        let mut grouped: BTreeMap<TaskField, Vec<String>> = BTreeMap::new();
        for violation in &self.violations {
            grouped
                .entry(violation.field())
                .or_default()
                .push(violation.to_string());
        }
        grouped
    }
}
