//! In-memory integration tests for task storage.

use super::helpers::{FrozenClock, clock};
use rstest::rstest;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueAt, NewTaskData, StatusId, Task, TaskId, TaskTitle, UserId},
    ports::{TaskRepository, TaskRepositoryError},
};

fn sample_task(clock: &FrozenClock) -> Result<Task, eyre::Report> {
    Ok(Task::new(
        NewTaskData {
            title: TaskTitle::new("Stored task")?,
            description: None,
            due: DueAt::parse(&clock.due(1, "09:00"))?,
            status_id: StatusId::new(),
            owner_id: UserId::new(),
        },
        clock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_then_find(clock: FrozenClock) -> Result<(), eyre::Report> {
    let repository = InMemoryTaskRepository::new();
    let task = sample_task(&clock)?;

    repository.store(&task).await?;

    eyre::ensure!(
        repository.find_by_id(task.id()).await? == Some(task),
        "task not found"
    );
    eyre::ensure!(
        repository.find_by_id(TaskId::new()).await?.is_none(),
        "unknown task found"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_store_is_rejected(clock: FrozenClock) -> Result<(), eyre::Report> {
    let repository = InMemoryTaskRepository::new();
    let task = sample_task(&clock)?;
    repository.store(&task).await?;

    let result = repository.store(&task).await;
    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected duplicate rejection, got {result:?}"
    );
    eyre::ensure!(repository.count().await? == 1, "duplicate stored");
    Ok(())
}
