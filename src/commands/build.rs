//! `robotask build` command.

use std::path::Path;

use crate::task::{RouteFile, Task};

/// Load a route file and assemble its task document.
///
/// # Errors
///
/// Returns an error string if the file cannot be read, parsed or built.
pub fn load_task(route: &Path) -> Result<Task, String> {
    RouteFile::load(route)?.into_task()
}

/// Execute the `build` command: print the task document as JSON.
///
/// # Errors
///
/// Returns an error string if the route cannot be turned into a task.
pub fn run(route: &Path) -> Result<(), String> {
    let task = load_task(route)?;
    let json = serde_json::to_string_pretty(&task)
        .map_err(|e| format!("Failed to serialize task: {e}"))?;
    println!("{json}");
    Ok(())
}
