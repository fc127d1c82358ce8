//! Connection pool and blocking helpers shared by the `PostgreSQL` adapters.
//!
//! Diesel calls are synchronous, so every query runs on the blocking thread
//! pool rather than on an async worker.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Checks out a connection and runs `f` on the blocking thread pool.
///
/// `map_pool` converts checkout failures and `map_join` converts a panicked
/// or cancelled blocking task into the caller's error type.
pub(super) async fn run_blocking<F, T, E, P, J>(
    pool: &TaskPgPool,
    f: F,
    map_pool: P,
    map_join: J,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    P: FnOnce(PoolError) -> E + Send + 'static,
    J: FnOnce(tokio::task::JoinError) -> E,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(map_pool)?;
        f(&mut connection)
    })
    .await
    .map_err(map_join)?
}
