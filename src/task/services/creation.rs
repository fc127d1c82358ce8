//! Service layer for validated task creation.

use crate::task::{
    config::TaskCreationConfig,
    domain::{AuthenticatedUser, DefaultStatusRule, NewTaskData, Status, Task, User, UserId},
    ports::{
        DirectoryError, StatusDirectory, TaskInputValidator, TaskRepository, TaskRepositoryError,
        UserDirectory, ValidationResult,
    },
    services::TaskCreated,
    validation::{DefaultTaskValidator, RawTaskInput, ValidatedTaskInput, ValidationError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Environment or storage faults raised while persisting a task.
///
/// These indicate a misconfigured deployment rather than bad input and
/// cannot be fixed by resubmitting the form.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No status satisfies the configured default-status rule.
    #[error("default status could not be resolved: no {0}")]
    DefaultStatusMissing(DefaultStatusRule),

    /// The authenticated caller has no user record.
    #[error("task owner does not exist: {0}")]
    OwnerNotFound(UserId),

    /// A status or user lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The task store rejected the write.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Service-level errors for task creation.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// The submitted input was rejected; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The environment could not persist the task; nothing was written.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl TaskCreationError {
    /// Returns `true` for faults that need operator attention rather than
    /// new input.
    #[must_use]
    pub const fn is_operational(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Returns the validation error when the input was rejected.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(_) => None,
        }
    }
}

/// Result type for task creation service operations.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Task creation orchestration service.
///
/// Validates raw input, resolves the default status and the caller's user
/// record, then stores the new task with a single write.
#[derive(Clone)]
pub struct TaskCreationService<R, S, U, C>
where
    R: TaskRepository,
    S: StatusDirectory,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    statuses: Arc<S>,
    users: Arc<U>,
    clock: Arc<C>,
    validator: Arc<dyn TaskInputValidator>,
    default_status: DefaultStatusRule,
}

impl<R, S, U, C> TaskCreationService<R, S, U, C>
where
    R: TaskRepository,
    S: StatusDirectory,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, statuses: Arc<S>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            statuses,
            users,
            clock,
            validator: Arc::new(DefaultTaskValidator::new()),
            default_status: DefaultStatusRule::default(),
        }
    }

    /// Applies validation limits and the default-status rule from `config`.
    #[must_use]
    pub fn with_config(mut self, config: TaskCreationConfig) -> Self {
        self.validator = Arc::new(DefaultTaskValidator::with_config(config.validation));
        self.default_status = config.default_status;
        self
    }

    /// Replaces the input validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn TaskInputValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the rule used to pick the initial status.
    #[must_use]
    pub const fn default_status_rule(&self) -> &DefaultStatusRule {
        &self.default_status
    }

    /// Validates raw input against today's date without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every rejected field.
    pub fn validate(&self, input: &RawTaskInput) -> ValidationResult<ValidatedTaskInput> {
        let today = self.clock.utc().date_naive();
        self.validator.validate(input, today)
    }

    /// Creates a task owned by `caller` from raw input.
    ///
    /// Any status supplied in `input` is ignored: the task always starts in
    /// the configured default status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Validation`] when the input is rejected
    /// and [`TaskCreationError::Persistence`] when the default status or the
    /// owner cannot be resolved or the store rejects the write. No task is
    /// stored in either case.
    pub async fn create(
        &self,
        input: &RawTaskInput,
        caller: AuthenticatedUser,
    ) -> TaskCreationResult<TaskCreated> {
        let validated = self.validate(input).inspect_err(|err| {
            let fields: Vec<&str> = err
                .violations()
                .iter()
                .map(|violation| violation.field().as_str())
                .collect();
            debug!(owner_id = %caller.user_id(), ?fields, "task input rejected");
        })?;

        let status = self.resolve_default_status().await?;
        let owner = self.resolve_owner(caller).await?;

        let (title, description, due) = validated.into_parts();
        let task = Task::new(
            NewTaskData {
                title,
                description,
                due,
                status_id: status.id(),
                owner_id: owner.id(),
            },
            &*self.clock,
        );

        let stored = self.repository.store(&task).await.map_err(|err| {
            error!(task_id = %task.id(), error = %err, "failed to store task");
            PersistenceError::from(err)
        })?;

        info!(
            task_id = %stored.id(),
            owner_id = %owner.id(),
            status = %status.name(),
            "task created"
        );
        Ok(TaskCreated::new(stored, status, owner))
    }

    async fn resolve_default_status(&self) -> Result<Status, PersistenceError> {
        let rule = &self.default_status;
        let found = self.statuses.find_default(rule).await.map_err(|err| {
            warn!(%rule, error = %err, "default status lookup failed");
            PersistenceError::from(err)
        })?;
        found.ok_or_else(|| {
            warn!(%rule, "default status is missing; is the status taxonomy seeded?");
            PersistenceError::DefaultStatusMissing(rule.clone())
        })
    }

    async fn resolve_owner(&self, caller: AuthenticatedUser) -> Result<User, PersistenceError> {
        let owner_id = caller.user_id();
        let found = self.users.find_by_id(owner_id).await.map_err(|err| {
            warn!(%owner_id, error = %err, "owner lookup failed");
            PersistenceError::from(err)
        })?;
        found.ok_or_else(|| {
            warn!(%owner_id, "authenticated caller has no user record");
            PersistenceError::OwnerNotFound(owner_id)
        })
    }
}
