//! `PostgreSQL` lookups for the status taxonomy and user records.

use super::{
    models::{StatusRow, UserRow},
    pool::{TaskPgPool, run_blocking},
    schema::{statuses, users},
};
use crate::task::{
    domain::{DefaultStatusRule, Status, StatusId, StatusName, User, UserId},
    ports::{DirectoryError, DirectoryResult, StatusDirectory, UserDirectory},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

async fn run<F, T>(pool: &TaskPgPool, f: F) -> DirectoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> DirectoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    run_blocking(
        pool,
        f,
        DirectoryError::persistence,
        DirectoryError::persistence,
    )
    .await
}

/// `PostgreSQL`-backed status taxonomy.
#[derive(Debug, Clone)]
pub struct PostgresStatusDirectory {
    pool: TaskPgPool,
}

impl PostgresStatusDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusDirectory for PostgresStatusDirectory {
    async fn find_default(&self, rule: &DefaultStatusRule) -> DirectoryResult<Option<Status>> {
        let lookup_rule = rule.clone();
        run(&self.pool, move |connection| {
            let query = statuses::table.select(StatusRow::as_select()).into_boxed();
            let filtered = match &lookup_rule {
                DefaultStatusRule::Named { name } => {
                    query.filter(statuses::name.eq(name.as_str().to_owned()))
                }
                DefaultStatusRule::Flagged => query.filter(statuses::is_default.eq(true)),
            };
            let rows = filtered
                .load::<StatusRow>(connection)
                .map_err(DirectoryError::persistence)?;

            match rows.as_slice() {
                [] => Ok(None),
                [row] => row_to_status(row.clone()).map(Some),
                many => Err(DirectoryError::AmbiguousDefaultStatus {
                    count: many.len(),
                    rule: lookup_rule,
                }),
            }
        })
        .await
    }
}

fn row_to_status(row: StatusRow) -> DirectoryResult<Status> {
    let name = StatusName::new(row.name).map_err(DirectoryError::persistence)?;
    let status = Status::new(StatusId::from_uuid(row.id), name);
    Ok(if row.is_default {
        status.flagged_default()
    } else {
        status
    })
}

/// `PostgreSQL`-backed user directory.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: TaskPgPool,
}

impl PostgresUserDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<Option<User>> {
        run(&self.pool, move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            Ok(row.map(|user| User::new(UserId::from_uuid(user.id), user.name, user.email)))
        })
        .await
    }
}
