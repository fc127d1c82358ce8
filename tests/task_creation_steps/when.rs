//! When steps for task creation BDD scenarios.

use super::world::{TaskCreationWorld, run_async};
use rstest_bdd_macros::when;
use taskdesk::task::domain::AuthenticatedUser;

#[when("the user submits the task")]
fn submit_task(world: &mut TaskCreationWorld) -> Result<(), eyre::Report> {
    let caller = world
        .caller
        .as_ref()
        .map(AuthenticatedUser::from)
        .ok_or_else(|| eyre::eyre!("missing authenticated user in scenario world"))?;
    let service = world.service();
    world.last_result = Some(run_async(service.create(&world.input, caller)));
    Ok(())
}
