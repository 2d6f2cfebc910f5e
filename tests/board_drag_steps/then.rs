//! Then steps for drag-and-drop behaviour scenarios.

use super::world::{BoardWorld, run_async};
use corkboard::board::domain::TaskStatus;
use corkboard::board::ports::TaskStore;
use eyre::{WrapErr, ensure, eyre};
use rstest_bdd_macros::then;

#[then(r#"the done column lists "{first}" then "{second}""#)]
fn done_column_lists(
    world: &mut BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let columns = world.controller.columns();
    let titles: Vec<&str> = columns.done.iter().map(|task| task.title()).collect();
    ensure!(
        titles == [first.as_str(), second.as_str()],
        "unexpected done column order: {titles:?}"
    );
    Ok(())
}

#[then(r#"the store records task "{title}" as "{status}""#)]
fn store_records_status(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str()).map_err(|error| eyre!(error))?;
    let id = world.id_of(&title)?;
    let tasks = run_async(world.store.fetch_all()).wrap_err("fetch persisted tasks")?;
    let task = tasks
        .iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre!("task {title} missing from store"))?;
    ensure!(
        task.status() == expected,
        "store holds {title} as {:?}, expected {expected:?}",
        task.status()
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag_result.as_ref() {
        Some(Ok(())) => {}
        Some(Err(error)) => return Err(eyre!("drag failed: {error}")),
        None => return Err(eyre!("no drag was performed")),
    }
    ensure!(
        world.controller.tasks() == world.baseline.as_slice(),
        "board diverged from its pre-drag state"
    );
    Ok(())
}

#[then("no status was written to the store")]
fn no_status_written(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.store.fetch_all()).wrap_err("fetch persisted tasks")?;
    ensure!(
        tasks.iter().all(|task| task.updated_at().is_none()),
        "a task carries an update timestamp"
    );
    Ok(())
}
