//! `robotask run` command.

use std::path::Path;

use super::build::load_task;
use super::status::describe;
use crate::context::ServiceContext;
use crate::watch::{watch, PollPolicy, WatchOutcome};

/// Execute the `run` command: create, start, then follow the task.
///
/// # Errors
///
/// Returns an error string if any step fails or polling gives up before the
/// task settles.
pub async fn run(ctx: &ServiceContext, route: &Path, policy: PollPolicy) -> Result<(), String> {
    let task = load_task(route)?;
    let task_id = ctx.tasks.create(&task).await.ok_or("Task creation failed")?;
    println!("Created task {task_id}.");

    if !ctx.tasks.execute(&task_id).await {
        return Err(format!("Task {task_id} could not be started"));
    }

    let outcome = watch(&ctx.tasks, &task_id, policy, |snapshot| {
        println!("{}", describe(snapshot));
    })
    .await;

    match outcome {
        WatchOutcome::Settled(snapshot) => {
            let state = match (snapshot.is_finish, snapshot.is_cancel) {
                (true, true) => "reported both finished and cancelled",
                (false, true) => "cancelled",
                _ => "finished",
            };
            println!("Task {task_id} {state}.");
            Ok(())
        }
        WatchOutcome::QueryFailed { failures } => {
            Err(format!("Lost track of task {task_id} after {failures} failed status queries"))
        }
        WatchOutcome::PollLimit { polls, .. } => {
            Err(format!("Task {task_id} still running after {polls} status queries"))
        }
    }
}
