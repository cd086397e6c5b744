//! Task document assembly.

use serde::Serialize;

use super::waypoint::Waypoint;
use crate::error::BuildError;

/// Routing policy for this task class.
pub const ROUTE_MODE: u8 = 1;
/// Run policy for this task class.
pub const RUN_MODE: u8 = 1;
/// Number of times the route is run.
pub const RUN_COUNT: u32 = 1;
/// Task category code.
pub const TASK_TYPE: u8 = 4;
/// Run category code.
pub const RUN_TYPE: u8 = 21;
/// Origin code identifying API-submitted tasks.
pub const SOURCE_TYPE: u8 = 6;
/// Travel speed in metres per second.
pub const SPEED: f64 = 1.0;

/// The document submitted to the task service.
///
/// Produced by [`TaskBuilder::build`]; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    name: String,
    robot_id: String,
    route_mode: u8,
    run_mode: u8,
    run_num: u32,
    task_type: u8,
    run_type: u8,
    source_type: u8,
    ignore_public_site: bool,
    speed: f64,
    task_pts: Vec<Waypoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    back_pt: Option<Waypoint>,
}

impl Task {
    /// Human-readable task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Robot the task is addressed to.
    #[must_use]
    pub fn robot_id(&self) -> &str {
        &self.robot_id
    }

    /// Route stops in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.task_pts
    }

    /// Where the robot goes once the route is done.
    #[must_use]
    pub fn return_point(&self) -> Option<&Waypoint> {
        self.back_pt.as_ref()
    }
}

/// Accumulates waypoints for a single task.
///
/// An empty route is accepted here; the service decides whether it is runnable.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    robot_id: String,
    waypoints: Vec<Waypoint>,
    return_point: Option<Waypoint>,
}

impl TaskBuilder {
    /// Starts a task called `name` for `robot_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidArgument`] if either argument is empty. Any
    /// other string, whitespace included, is passed through unchanged.
    pub fn new(name: impl Into<String>, robot_id: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        let robot_id = robot_id.into();
        if name.is_empty() {
            return Err(BuildError::InvalidArgument { argument: "name" });
        }
        if robot_id.is_empty() {
            return Err(BuildError::InvalidArgument { argument: "robotId" });
        }
        Ok(Self { name, robot_id, waypoints: Vec::new(), return_point: None })
    }

    /// Appends a stop to the route.
    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> &mut Self {
        self.waypoints.push(waypoint);
        self
    }

    /// Sets the return point, replacing any earlier one.
    pub fn set_return_point(&mut self, waypoint: Waypoint) -> &mut Self {
        self.return_point = Some(waypoint);
        self
    }

    /// Number of route stops added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether no route stops have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Snapshots the current state as a task document. Can be called repeatedly.
    #[must_use]
    pub fn build(&self) -> Task {
        Task {
            name: self.name.clone(),
            robot_id: self.robot_id.clone(),
            route_mode: ROUTE_MODE,
            run_mode: RUN_MODE,
            run_num: RUN_COUNT,
            task_type: TASK_TYPE,
            run_type: RUN_TYPE,
            source_type: SOURCE_TYPE,
            ignore_public_site: false,
            speed: SPEED,
            task_pts: self.waypoints.clone(),
            back_pt: self.return_point.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Action, Poi};
    use serde_json::json;

    fn stop(name: &str, x: f64) -> Waypoint {
        Waypoint::new(&Poi::new("area", x, x, name), false)
    }

    #[test]
    fn empty_arguments_are_rejected() {
        assert_eq!(
            TaskBuilder::new("", "R1").unwrap_err(),
            BuildError::InvalidArgument { argument: "name" }
        );
        assert_eq!(
            TaskBuilder::new("Task1", "").unwrap_err(),
            BuildError::InvalidArgument { argument: "robotId" }
        );
    }

    #[test]
    fn whitespace_arguments_pass_through() {
        let task = TaskBuilder::new(" ", "  ").unwrap().build();
        assert_eq!(task.name(), " ");
        assert_eq!(task.robot_id(), "  ");
    }

    #[test]
    fn policy_fields_are_fixed() {
        let task = TaskBuilder::new("Task1", "R1").unwrap().build();
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Task1",
                "robotId": "R1",
                "routeMode": 1,
                "runMode": 1,
                "runNum": 1,
                "taskType": 4,
                "runType": 21,
                "sourceType": 6,
                "ignorePublicSite": false,
                "speed": 1.0,
                "taskPts": []
            })
        );
    }

    #[test]
    fn waypoints_keep_insertion_order() {
        let mut builder = TaskBuilder::new("Task1", "R1").unwrap();
        builder.add_waypoint(stop("a", 0.0)).add_waypoint(stop("b", 1.0)).add_waypoint(stop("c", 2.0));
        let names: Vec<_> = builder.build().waypoints().iter().map(|w| w.name().to_string()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn last_return_point_wins() {
        let mut builder = TaskBuilder::new("Task1", "R1").unwrap();
        builder.set_return_point(stop("first", 0.0)).set_return_point(stop("second", 5.0));
        let task = builder.build();
        assert_eq!(task.return_point().map(Waypoint::name), Some("second"));
    }

    #[test]
    fn build_is_repeatable() {
        let mut builder = TaskBuilder::new("Task1", "R1").unwrap();
        let mut wp = stop("a", 0.0);
        wp.append(Action::pause(2));
        builder.add_waypoint(wp);
        assert_eq!(builder.build(), builder.build());

        builder.add_waypoint(stop("b", 1.0));
        assert_eq!(builder.build().waypoints().len(), 2);
    }

    #[test]
    fn empty_route_still_builds() {
        let builder = TaskBuilder::new("Task1", "R1").unwrap();
        assert!(builder.is_empty());
        assert!(builder.build().waypoints().is_empty());
        assert!(builder.build().return_point().is_none());
    }
}
