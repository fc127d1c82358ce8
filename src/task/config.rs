//! Configuration for the task creation workflow.

use crate::task::{
    domain::{DefaultStatusRule, MAX_TITLE_LENGTH},
    ports::validator::TaskValidationConfig,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid task creation configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The title limit is zero or larger than the storage column allows.
    #[error("max_title_length must be between 1 and 255, got {0}")]
    InvalidTitleLimit(usize),
}

/// Settings for the task creation service.
///
/// Every field has a default, so an empty document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use taskdesk::task::config::TaskCreationConfig;
/// use taskdesk::task::domain::DefaultStatusRule;
///
/// let config = TaskCreationConfig::from_json_str(r#"{"default_status": {"rule": "flagged"}}"#)
///     .expect("valid configuration");
/// assert_eq!(config.default_status, DefaultStatusRule::Flagged);
/// assert_eq!(config.validation.max_title_length, 255);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskCreationConfig {
    /// Field validation settings.
    pub validation: TaskValidationConfig,
    /// Rule selecting the status assigned to new tasks.
    pub default_status: DefaultStatusRule,
}

impl TaskCreationConfig {
    /// Parses and checks a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown rule
    /// values, and [`ConfigError::InvalidTitleLimit`] when the title limit
    /// is out of range.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    /// Replaces the default-status rule.
    #[must_use]
    pub fn with_default_status(mut self, rule: DefaultStatusRule) -> Self {
        self.default_status = rule;
        self
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTitleLimit`] when the title limit is
    /// zero or exceeds [`MAX_TITLE_LENGTH`].
    pub const fn check(&self) -> Result<(), ConfigError> {
        let limit = self.validation.max_title_length;
        if limit == 0 || limit > MAX_TITLE_LENGTH {
            return Err(ConfigError::InvalidTitleLimit(limit));
        }
        Ok(())
    }
}
