//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use taskdesk::task::{
    adapters::memory::{InMemoryStatusDirectory, InMemoryTaskRepository, InMemoryUserDirectory},
    domain::{Status, StatusId, StatusName, User, UserId},
    services::TaskCreationService,
    validation::RawTaskInput,
};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock(DateTime<Utc>);

impl FrozenClock {
    /// Returns the frozen calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Formats a due value `days` from today at `time`.
    #[must_use]
    pub fn due(&self, days: i64, time: &str) -> String {
        format!("{}T{time}", (self.today() + Duration::days(days)).format("%Y-%m-%d"))
    }
}

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Provides a clock frozen mid-afternoon on a fixed day.
#[fixture]
pub fn clock() -> FrozenClock {
    FrozenClock(
        Utc.with_ymd_and_hms(2026, 5, 4, 16, 45, 0)
            .single()
            .unwrap_or_default(),
    )
}

/// Builds the three statuses a fresh installation is seeded with.
#[must_use]
pub fn seeded_statuses() -> Vec<Status> {
    ["Pending", "In Progress", "Completed"]
        .into_iter()
        .filter_map(|name| StatusName::new(name).ok())
        .map(|name| Status::new(StatusId::new(), name))
        .collect()
}

/// Service type wired to in-memory adapters.
pub type MemoryTaskService = TaskCreationService<
    InMemoryTaskRepository,
    InMemoryStatusDirectory,
    InMemoryUserDirectory,
    FrozenClock,
>;

/// A creation service plus handles to its backing stores.
pub struct TestContext {
    pub service: MemoryTaskService,
    pub repository: Arc<InMemoryTaskRepository>,
    pub statuses: Arc<InMemoryStatusDirectory>,
    pub users: Arc<InMemoryUserDirectory>,
    pub user: User,
    pub clock: FrozenClock,
}

/// Wires a service over seeded in-memory stores with one registered user.
#[must_use]
pub fn context_with(clock: FrozenClock, statuses: Vec<Status>) -> TestContext {
    let user = User::new(UserId::new(), "Grace Hopper", "grace@example.com");
    let repository = Arc::new(InMemoryTaskRepository::new());
    let status_directory = Arc::new(InMemoryStatusDirectory::with_statuses(statuses));
    let users = Arc::new(InMemoryUserDirectory::with_users([user.clone()]));
    let service = TaskCreationService::new(
        Arc::clone(&repository),
        Arc::clone(&status_directory),
        Arc::clone(&users),
        Arc::new(clock),
    );
    TestContext {
        service,
        repository,
        statuses: status_directory,
        users,
        user,
        clock,
    }
}

/// Provides a context seeded with the standard statuses.
#[fixture]
pub fn context(clock: FrozenClock) -> TestContext {
    context_with(clock, seeded_statuses())
}

/// Builds a form submission with a title, description and due value.
#[must_use]
pub fn submission(title: &str, description: &str, due: &str) -> RawTaskInput {
    RawTaskInput::new()
        .with("title", title)
        .with("description", description)
        .with("due", due)
}
