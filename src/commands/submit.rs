//! `robotask submit` command.

use std::path::Path;

use super::build::load_task;
use crate::context::ServiceContext;

/// Execute the `submit` command.
///
/// Prints the new task id on success.
///
/// # Errors
///
/// Returns an error string if the route is invalid, creation fails, or
/// `execute` was requested and starting the task fails.
pub async fn run(ctx: &ServiceContext, route: &Path, execute: bool) -> Result<(), String> {
    let task = load_task(route)?;
    let task_id = ctx.tasks.create(&task).await.ok_or("Task creation failed")?;
    println!("{task_id}");

    if execute && !ctx.tasks.execute(&task_id).await {
        return Err(format!("Task {task_id} was created but could not be started"));
    }
    Ok(())
}
