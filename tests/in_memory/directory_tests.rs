//! In-memory integration tests for status and user directories.

use super::helpers::seeded_statuses;
use rstest::rstest;
use taskdesk::task::{
    adapters::memory::{InMemoryStatusDirectory, InMemoryUserDirectory},
    domain::{DefaultStatusRule, Status, StatusId, StatusName, User, UserId},
    ports::{DirectoryError, StatusDirectory, UserDirectory},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_rule_finds_pending() -> Result<(), eyre::Report> {
    let directory = InMemoryStatusDirectory::with_statuses(seeded_statuses());

    let found = directory
        .find_default(&DefaultStatusRule::default())
        .await?
        .ok_or_else(|| eyre::eyre!("Pending should be found"))?;
    eyre::ensure!(found.name().as_str() == "Pending", "wrong status");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_order_does_not_change_default() -> Result<(), eyre::Report> {
    let mut statuses = seeded_statuses();
    statuses.reverse();
    let directory = InMemoryStatusDirectory::with_statuses(statuses);

    let found = directory
        .find_default(&DefaultStatusRule::default())
        .await?
        .ok_or_else(|| eyre::eyre!("Pending should be found"))?;
    eyre::ensure!(found.name().as_str() == "Pending", "wrong status");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_taxonomy_has_no_default() -> Result<(), eyre::Report> {
    let directory = InMemoryStatusDirectory::new();
    eyre::ensure!(
        directory
            .find_default(&DefaultStatusRule::Flagged)
            .await?
            .is_none(),
        "expected no default"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_flagged_statuses_are_ambiguous() -> Result<(), eyre::Report> {
    let directory = InMemoryStatusDirectory::new();
    for name in ["Open", "New"] {
        directory.insert(Status::new(StatusId::new(), StatusName::new(name)?).flagged_default())?;
    }

    let result = directory.find_default(&DefaultStatusRule::Flagged).await;
    eyre::ensure!(
        matches!(
            result,
            Err(DirectoryError::AmbiguousDefaultStatus { count: 2, .. })
        ),
        "expected ambiguity, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_lookup_by_id() -> Result<(), eyre::Report> {
    let user = User::new(UserId::new(), "Linus", "linus@example.com");
    let directory = InMemoryUserDirectory::new();
    directory.insert(user.clone())?;

    eyre::ensure!(
        directory.find_by_id(user.id()).await? == Some(user),
        "user not found"
    );
    eyre::ensure!(
        directory.find_by_id(UserId::new()).await?.is_none(),
        "unknown user found"
    );
    Ok(())
}
