//! `robotask status` command.

use crate::context::ServiceContext;
use crate::ports::TaskSnapshot;

/// One-line rendering of the three state flags.
#[must_use]
pub fn describe(snapshot: &TaskSnapshot) -> String {
    format!(
        "isCancel:{} isFinish:{} isExecuting:{}",
        snapshot.is_cancel, snapshot.is_finish, snapshot.is_executing
    )
}

/// Execute the `status` command.
///
/// # Errors
///
/// Returns an error string if the status could not be fetched.
pub async fn run(ctx: &ServiceContext, task_id: &str) -> Result<(), String> {
    let snapshot =
        ctx.tasks.query(task_id).await.ok_or_else(|| format!("No status for task {task_id}"))?;
    println!("{}", describe(&snapshot));
    Ok(())
}
