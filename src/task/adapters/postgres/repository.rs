//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    pool::{TaskPgPool, run_blocking},
    schema::tasks,
};
use crate::task::{
    domain::{
        DueAt, PersistedTaskData, StatusId, Task, TaskDescription, TaskId, TaskTitle, UserId,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Foreign key from `tasks.status_id` to `statuses.id`.
const STATUS_FOREIGN_KEY: &str = "tasks_status_id_fkey";

/// Foreign key from `tasks.owner_id` to `users.id`.
const OWNER_FOREIGN_KEY: &str = "tasks_owner_id_fkey";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking(
            &self.pool,
            f,
            TaskRepositoryError::persistence,
            TaskRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task);
        let task_id = task.id();
        let status_id = task.status_id();
        let owner_id = task.owner_id();

        self.run(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| classify_insert_error(err, task_id, status_id, owner_id))?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn count(&self) -> TaskRepositoryResult<u64> {
        self.run(|connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|d| d.as_str().to_owned()),
        status_id: task.status_id().into_inner(),
        due: task.due().as_naive(),
        owner_id: task.owner_id().into_inner(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        status_id,
        due,
        owner_id,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description: description.and_then(TaskDescription::new),
        status_id: StatusId::from_uuid(status_id),
        due: DueAt::from_naive(due),
        owner_id: UserId::from_uuid(owner_id),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn classify_insert_error(
    err: DieselError,
    task_id: TaskId,
    status_id: StatusId,
    owner_id: UserId,
) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TaskRepositoryError::DuplicateTask(task_id)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info)
            if violates(info.as_ref(), STATUS_FOREIGN_KEY) =>
        {
            TaskRepositoryError::UnknownStatus(status_id)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info)
            if violates(info.as_ref(), OWNER_FOREIGN_KEY) =>
        {
            TaskRepositoryError::UnknownOwner(owner_id)
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

fn violates(info: &dyn DatabaseErrorInformation, constraint: &str) -> bool {
    info.constraint_name().is_some_and(|name| name == constraint)
}
