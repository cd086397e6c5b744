//! `robotask execute` command.

use crate::context::ServiceContext;

/// Execute the `execute` command.
///
/// # Errors
///
/// Returns an error string if the service does not start the task.
pub async fn run(ctx: &ServiceContext, task_id: &str) -> Result<(), String> {
    if ctx.tasks.execute(task_id).await {
        println!("Task {task_id} started.");
        Ok(())
    } else {
        Err(format!("Task {task_id} could not be started"))
    }
}
