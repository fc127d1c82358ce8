//! In-memory integration tests for the task creation workflow.

use super::helpers::{FrozenClock, TestContext, clock, context, context_with, submission};
use rstest::rstest;
use taskdesk::task::{
    config::TaskCreationConfig,
    domain::{AuthenticatedUser, DefaultStatusRule, Status, StatusId, StatusName, User, UserId},
    ports::TaskRepository,
    services::{CreationResponse, TASK_CREATED_MESSAGE},
    validation::{RawTaskInput, TaskField},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn valid_submission_is_stored_pending(context: TestContext) -> Result<(), eyre::Report> {
    let due = context.clock.due(7, "14:00");
    let input = submission("Write report", "Quarterly figures", &due);

    let created = context
        .service
        .create(&input, AuthenticatedUser::from(&context.user))
        .await?;

    eyre::ensure!(created.message() == TASK_CREATED_MESSAGE, "unexpected message");
    eyre::ensure!(
        created.status().name().as_str() == "Pending",
        "expected Pending, found {}",
        created.status().name()
    );
    eyre::ensure!(created.task().owner_id() == context.user.id(), "owner mismatch");
    eyre::ensure!(created.task().due().to_string() == due, "due mismatch");

    let stored = context
        .repository
        .find_by_id(created.task().id())
        .await?
        .ok_or_else(|| eyre::eyre!("task was not stored"))?;
    eyre::ensure!(&stored == created.task(), "stored task differs");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_submission_creates_a_new_task(context: TestContext) -> Result<(), eyre::Report> {
    let caller = AuthenticatedUser::from(&context.user);
    let input = submission("Repeatable", "", &context.clock.due(1, "08:00"));

    let first = context.service.create(&input, caller).await?;
    let second = context.service.create(&input, caller).await?;

    eyre::ensure!(first.task().id() != second.task().id(), "ids must differ");
    eyre::ensure!(first.task().description().is_none(), "blank description kept");
    eyre::ensure!(context.repository.count().await? == 2, "expected two tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn past_due_is_rejected_without_writes(context: TestContext) -> Result<(), eyre::Report> {
    let input = submission("Late", "", &context.clock.due(-1, "10:00"));

    let result = context
        .service
        .create(&input, AuthenticatedUser::from(&context.user))
        .await;
    let response = CreationResponse::from(result);

    let CreationResponse::Rejected { errors } = response else {
        return Err(eyre::eyre!("expected a rejected response"));
    };
    eyre::ensure!(errors.contains_key(&TaskField::Due), "due not reported");
    eyre::ensure!(errors.len() == 1, "unexpected fields: {errors:?}");
    eyre::ensure!(context.repository.count().await? == 0, "task was stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_title_and_due_are_both_reported(
    context: TestContext,
) -> Result<(), eyre::Report> {
    let input = RawTaskInput::new().with("description", "only a description");

    let err = context
        .service
        .create(&input, AuthenticatedUser::from(&context.user))
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("expected rejection"))?;
    let validation = err
        .as_validation()
        .ok_or_else(|| eyre::eyre!("expected validation failure, got {err}"))?;

    eyre::ensure!(validation.has_field(TaskField::Title), "title not reported");
    eyre::ensure!(validation.has_field(TaskField::Due), "due not reported");
    eyre::ensure!(
        !validation.has_field(TaskField::Description),
        "description wrongly reported"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unseeded_taxonomy_fails_operationally(
    clock: FrozenClock,
) -> Result<(), eyre::Report> {
    let context = context_with(clock, Vec::new());
    let input = submission("Anything", "", &context.clock.due(2, "09:30"));

    let result = context
        .service
        .create(&input, AuthenticatedUser::from(&context.user))
        .await;

    let Err(err) = &result else {
        return Err(eyre::eyre!("expected failure with no statuses"));
    };
    eyre::ensure!(err.is_operational(), "expected operational failure");
    eyre::ensure!(
        matches!(CreationResponse::from(result), CreationResponse::Failed { .. }),
        "expected generic failure response"
    );
    eyre::ensure!(context.repository.count().await? == 0, "task was stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_rule_picks_flagged_status(
    clock: FrozenClock,
) -> Result<(), eyre::Report> {
    let inbox = Status::new(StatusId::new(), StatusName::new("Inbox")?).flagged_default();
    let context = context_with(clock, vec![inbox.clone()]);
    let config = TaskCreationConfig::from_json_str(r#"{"default_status": {"rule": "flagged"}}"#)?;
    let service = context.service.clone().with_config(config);
    eyre::ensure!(
        service.default_status_rule() == &DefaultStatusRule::Flagged,
        "rule not applied"
    );

    let created = service
        .create(
            &submission("Triage", "", &context.clock.due(0, "23:00")),
            AuthenticatedUser::from(&context.user),
        )
        .await?;
    eyre::ensure!(created.task().status_id() == inbox.id(), "wrong status");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn caller_without_user_record_fails(context: TestContext) -> Result<(), eyre::Report> {
    let stranger = AuthenticatedUser::new(UserId::new());
    let input = submission("Orphan", "", &context.clock.due(1, "12:00"));

    let err = context
        .service
        .create(&input, stranger)
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("expected failure"))?;
    eyre::ensure!(err.is_operational(), "expected operational failure: {err}");
    eyre::ensure!(context.repository.count().await? == 0, "task was stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_registered_after_wiring_can_create(
    context: TestContext,
) -> Result<(), eyre::Report> {
    let newcomer = User::new(UserId::new(), "Ken", "ken@example.com");
    context.users.insert(newcomer.clone())?;

    let created = context
        .service
        .create(
            &submission("Welcome", "", &context.clock.due(3, "10:00")),
            AuthenticatedUser::from(&newcomer),
        )
        .await?;
    eyre::ensure!(created.owner() == &newcomer, "owner mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_default_status_blocks_creation(
    context: TestContext,
) -> Result<(), eyre::Report> {
    context
        .statuses
        .insert(Status::new(StatusId::new(), StatusName::new("Pending")?))?;

    let result = context
        .service
        .create(
            &submission("Blocked", "", &context.clock.due(3, "10:00")),
            AuthenticatedUser::from(&context.user),
        )
        .await;
    eyre::ensure!(
        result.as_ref().is_err_and(|err| err.is_operational()),
        "expected operational failure"
    );
    eyre::ensure!(context.repository.count().await? == 0, "task was stored");
    Ok(())
}
