//! Raw and validated task input records.

use crate::task::domain::{DueAt, TaskDescription, TaskTitle};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untrusted task input as submitted by a form or API client.
///
/// Every key is optional and values may have any JSON type; the validator
/// decides what is acceptable. Keys other than `title`, `description` and
/// `due` are carried but never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTaskInput(Map<String, Value>);

impl RawTaskInput {
    /// Creates an empty input record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Sets a key, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value for `key`, treating JSON `null` as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawTaskInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Normalised task input that passed every field rule.
///
/// Holds exactly the validated fields; anything else in the raw input,
/// such as a client-supplied status, is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTaskInput {
    title: TaskTitle,
    description: Option<TaskDescription>,
    due: DueAt,
}

impl ValidatedTaskInput {
    pub(crate) const fn new(
        title: TaskTitle,
        description: Option<TaskDescription>,
        due: DueAt,
    ) -> Self {
        Self {
            title,
            description,
            due,
        }
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the normalised description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the validated due value.
    #[must_use]
    pub const fn due(&self) -> DueAt {
        self.due
    }

    /// Splits the record into its fields.
    #[must_use]
    pub fn into_parts(self) -> (TaskTitle, Option<TaskDescription>, DueAt) {
        (self.title, self.description, self.due)
    }
}
