//! Given steps for task creation BDD scenarios.

use super::world::TaskCreationWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::domain::{Status, StatusId, StatusName, User, UserId};

#[given("the standard statuses are seeded")]
fn standard_statuses_seeded(world: &mut TaskCreationWorld) -> Result<(), eyre::Report> {
    for name in ["Pending", "In Progress", "Completed"] {
        let status_name = StatusName::new(name).wrap_err("seeded status name")?;
        world
            .statuses
            .insert(Status::new(StatusId::new(), status_name))
            .wrap_err("seed status")?;
    }
    Ok(())
}

#[given(r#"an authenticated user "{name}""#)]
fn authenticated_user(world: &mut TaskCreationWorld, name: String) -> Result<(), eyre::Report> {
    let email = format!("{}@example.com", name.to_lowercase());
    let user = User::new(UserId::new(), name, email);
    world
        .users
        .insert(user.clone())
        .wrap_err("register user")?;
    world.caller = Some(user);
    Ok(())
}

#[given(r#"a task titled "{title}" described as "{description}""#)]
fn task_titled(world: &mut TaskCreationWorld, title: String, description: String) {
    let input = std::mem::take(&mut world.input);
    world.input = input
        .with("title", title)
        .with("description", description);
}

#[given(r#"a task with an empty title described as "{description}""#)]
fn task_with_empty_title(world: &mut TaskCreationWorld, description: String) {
    let input = std::mem::take(&mut world.input);
    world.input = input.with("title", "").with("description", description);
}

#[given(r#"the task is due tomorrow at "{time}""#)]
fn due_tomorrow(world: &mut TaskCreationWorld, time: String) {
    let due = world.due_in_days(1, &time);
    let input = std::mem::take(&mut world.input);
    world.input = input.with("due", due);
}

#[given(r#"the task is due yesterday at "{time}""#)]
fn due_yesterday(world: &mut TaskCreationWorld, time: String) {
    let due = world.due_in_days(-1, &time);
    let input = std::mem::take(&mut world.input);
    world.input = input.with("due", due);
}

#[given(r#"the task is due at "{due}""#)]
fn due_at(world: &mut TaskCreationWorld, due: String) {
    let input = std::mem::take(&mut world.input);
    world.input = input.with("due", due);
}
