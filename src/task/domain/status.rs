//! Workflow status entities consumed from the status taxonomy.

use super::{StatusId, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the status selected by [`DefaultStatusRule::default`].
pub const DEFAULT_STATUS_NAME: &str = "Pending";

/// Trimmed, non-empty status name such as `Pending` or `In Progress`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusName(String);

impl StatusName {
    /// Creates a validated status name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyStatusName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyStatusName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the status name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StatusName {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusName> for String {
    fn from(value: StatusName) -> Self {
        value.0
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A workflow state from the externally provisioned status taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    id: StatusId,
    name: StatusName,
    is_default: bool,
}

impl Status {
    /// Creates a status that is not flagged as the taxonomy default.
    #[must_use]
    pub const fn new(id: StatusId, name: StatusName) -> Self {
        Self {
            id,
            name,
            is_default: false,
        }
    }

    /// Marks the status as the taxonomy default.
    #[must_use]
    pub const fn flagged_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the status name.
    #[must_use]
    pub const fn name(&self) -> &StatusName {
        &self.name
    }

    /// Returns whether the taxonomy flags this status as its default.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Rule naming which status a newly created task starts in.
///
/// The rule is explicit configuration rather than an ordinal position in the
/// seeded taxonomy, so reseeding in a different order cannot silently change
/// the initial status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DefaultStatusRule {
    /// Select the status with this exact name.
    Named {
        /// Name of the default status.
        name: StatusName,
    },
    /// Select the status carrying the taxonomy's `is_default` flag.
    Flagged,
}

impl DefaultStatusRule {
    /// Creates a rule selecting the status with the given name.
    #[must_use]
    pub const fn named(name: StatusName) -> Self {
        Self::Named { name }
    }

    /// Returns `true` when `status` is the one this rule selects.
    #[must_use]
    pub fn selects(&self, status: &Status) -> bool {
        match self {
            Self::Named { name } => status.name() == name,
            Self::Flagged => status.is_default(),
        }
    }
}

impl Default for DefaultStatusRule {
    fn default() -> Self {
        Self::Named {
            name: StatusName(DEFAULT_STATUS_NAME.to_owned()),
        }
    }
}

impl fmt::Display for DefaultStatusRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name } => write!(f, "status named '{name}'"),
            Self::Flagged => f.write_str("status flagged as default"),
        }
    }
}
