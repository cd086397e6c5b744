//! YAML route files describing a complete task.
//!
//! ```yaml
//! name: Task1
//! robot_id: R1
//! points:
//!   - poi: { areaId: a1, coordinate: [0.0, 0.0], name: m1 }
//!   - poi: { areaId: a1, coordinate: [1.0, 1.0], name: m2 }
//!     actions:
//!       - { kind: play_audio, audio_id: "3111002" }
//!       - { kind: pause, seconds: 10 }
//! return_point:
//!   poi: { areaId: a1, coordinate: [0.0, 0.0], name: m1 }
//!   actions:
//!     - kind: wait
//!       user_data: { cmd: test }
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::action::Action;
use super::builder::{Task, TaskBuilder};
use super::waypoint::Waypoint;

/// An action entry in a route file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSpec {
    /// See [`Action::Pause`].
    Pause {
        /// Pause length in seconds.
        seconds: u32,
    },
    /// See [`Action::PlayAudio`].
    PlayAudio {
        /// Catalog clip id.
        audio_id: String,
    },
    /// See [`Action::Wait`].
    Wait {
        /// Payload echoed back by the service.
        #[serde(default)]
        user_data: Value,
    },
    /// See [`Action::LiftUp`].
    LiftUp {
        /// Lift area.
        use_area_id: String,
    },
    /// See [`Action::LiftDown`].
    LiftDown {
        /// Lift area.
        use_area_id: String,
    },
}

impl From<ActionSpec> for Action {
    fn from(spec: ActionSpec) -> Self {
        match spec {
            ActionSpec::Pause { seconds } => Action::pause(seconds),
            ActionSpec::PlayAudio { audio_id } => Action::play_audio(audio_id),
            ActionSpec::Wait { user_data } => Action::wait(user_data),
            ActionSpec::LiftUp { use_area_id } => Action::lift_up(use_area_id),
            ActionSpec::LiftDown { use_area_id } => Action::lift_down(use_area_id),
        }
    }
}

/// A route stop in a route file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointSpec {
    /// Raw point-of-interest record, as listed by the map service.
    pub poi: Value,
    /// Whether to carry the record's heading.
    #[serde(default)]
    pub include_yaw: bool,
    /// Actions in execution order.
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

impl PointSpec {
    fn into_waypoint(self) -> Result<Waypoint, String> {
        let mut waypoint = Waypoint::from_record(&self.poi, self.include_yaw)
            .map_err(|e| format!("Invalid point: {e}"))?;
        for action in self.actions {
            waypoint.append(action.into());
        }
        Ok(waypoint)
    }
}

/// A task described in YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteFile {
    /// Task name.
    pub name: String,
    /// Target robot.
    pub robot_id: String,
    /// Route stops in visiting order.
    #[serde(default)]
    pub points: Vec<PointSpec>,
    /// Optional stop to return to after the route.
    #[serde(default)]
    pub return_point: Option<PointSpec>,
}

impl RouteFile {
    /// Parses a route file from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the route schema.
    pub fn parse(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse route file: {e}"))
    }

    /// Reads and parses a route file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read route file {}: {e}", path.display()))?;
        Self::parse(&content)
    }

    /// Builds the task document the file describes.
    ///
    /// # Errors
    ///
    /// Returns an error if a point record is incomplete or the name or robot id is empty.
    pub fn into_task(self) -> Result<Task, String> {
        let mut builder =
            TaskBuilder::new(self.name, self.robot_id).map_err(|e| format!("Invalid task: {e}"))?;
        for point in self.points {
            builder.add_waypoint(point.into_waypoint()?);
        }
        if let Some(point) = self.return_point {
            builder.set_return_point(point.into_waypoint()?);
        }
        Ok(builder.build())
    }
}
