//! Validated scalar fields carried by a task.

use super::TaskDomainError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum title length in characters, matching the `VARCHAR(255)` column.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Wire format accepted for due values (`YYYY-MM-DDTHH:mm`).
pub const DUE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Trimmed, non-empty task title.
///
/// Deserialisation runs the same checks as [`TaskTitle::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title limited to [`MAX_TITLE_LENGTH`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`TaskDomainError::TitleTooLong`] when it exceeds the
    /// limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::with_max_length(value, MAX_TITLE_LENGTH)
    }

    /// Creates a validated title with a caller-supplied character limit.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming or [`TaskDomainError::TitleTooLong`] when it exceeds `max`.
    pub fn with_max_length(value: impl Into<String>, max: usize) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let actual = trimmed.chars().count();
        if actual > max {
            return Err(TaskDomainError::TitleTooLong { max, actual });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task description of unbounded length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a description, returning `None` for blank input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Minute-precision due date and time without a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DueAt(NaiveDateTime);

impl DueAt {
    /// Parses a due value in the strict `YYYY-MM-DDTHH:mm` format.
    ///
    /// Fields must be zero-padded, the year has exactly four digits, and no
    /// seconds or offset are accepted: the parsed value rendered back through
    /// [`DUE_FORMAT`] must reproduce the input exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedDue`] when the value does not
    /// match the format.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let parsed = NaiveDateTime::parse_from_str(value, DUE_FORMAT)
            .map_err(|_| TaskDomainError::MalformedDue(value.to_owned()))?;
        // `%Y` also accepts signed years wider than four digits.
        let four_digit_year = (0..=9999).contains(&parsed.year());
        if !four_digit_year || parsed.format(DUE_FORMAT).to_string() != value {
            return Err(TaskDomainError::MalformedDue(value.to_owned()));
        }
        Ok(Self(parsed))
    }

    /// Wraps a stored date-time value.
    #[must_use]
    pub const fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Returns the wrapped date-time.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDateTime {
        self.0
    }

    /// Returns the calendar date component.
    #[must_use]
    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    /// Returns `true` when the due date falls on a day before `today`.
    ///
    /// Any time on `today` itself is not considered past.
    #[must_use]
    pub fn is_before_day(self, today: NaiveDate) -> bool {
        self.date() < today
    }
}

impl fmt::Display for DueAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_FORMAT))
    }
}

impl Serialize for DueAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
