//! `robotask robot-state` command.

use crate::context::ServiceContext;

/// Execute the `robot-state` command: print the state record as JSON.
///
/// # Errors
///
/// Returns an error string if the state could not be fetched.
pub async fn run(ctx: &ServiceContext, robot_id: &str) -> Result<(), String> {
    let state =
        ctx.robots.state(robot_id).await.ok_or_else(|| format!("No state for robot {robot_id}"))?;
    let json = serde_json::to_string_pretty(&state)
        .map_err(|e| format!("Failed to serialize robot state: {e}"))?;
    println!("{json}");
    Ok(())
}
