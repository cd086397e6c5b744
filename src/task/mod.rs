//! Task document construction.
//!
//! Actions attach to waypoints, waypoints attach to a task builder, and the
//! builder produces the [`Task`] document sent to the task service.

mod action;
mod builder;
mod route;
mod waypoint;

pub use action::{Action, LIFT_DOWN_CODE, LIFT_UP_CODE, PAUSE_CODE, PLAY_AUDIO_CODE, WAIT_CODE};
pub use builder::{
    Task, TaskBuilder, ROUTE_MODE, RUN_COUNT, RUN_MODE, RUN_TYPE, SOURCE_TYPE, SPEED, TASK_TYPE,
};
pub use route::{ActionSpec, PointSpec, RouteFile};
pub use waypoint::{PointExt, Poi, Waypoint};
