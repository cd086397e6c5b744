//! `robotask robots` command.

use crate::context::ServiceContext;
use crate::ports::{Page, RobotSummary};

/// One-line rendering of a listed robot.
#[must_use]
pub fn describe(robot: &RobotSummary) -> String {
    let presence = if robot.is_online { "online" } else { "offline" };
    format!("{} {presence}", robot.robot_id)
}

/// Execute the `robots` command.
///
/// # Errors
///
/// Returns an error string if the list could not be fetched.
pub async fn run(ctx: &ServiceContext, page: Page) -> Result<(), String> {
    let robots = ctx.robots.list(page).await.ok_or("Robot list unavailable")?;
    if robots.is_empty() {
        println!("No robots on page {}.", page.page_num);
    }
    for robot in &robots {
        println!("{}", describe(robot));
    }
    Ok(())
}
