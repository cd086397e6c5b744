//! Recording adapter for the `RobotService` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::robot_service::{Page, RobotService, RobotState, RobotSummary};
use crate::ports::task_service::ServiceFuture;

/// Port name used for robot registry interactions.
pub const PORT: &str = "robots";

/// Records robot registry calls while delegating to an inner implementation.
pub struct RecordingRobotService {
    inner: Box<dyn RobotService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingRobotService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn RobotService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl RobotService for RecordingRobotService {
    fn list_robots(&self, page: Page) -> ServiceFuture<'_, Vec<RobotSummary>> {
        Box::pin(async move {
            let result = self.inner.list_robots(page).await;
            record_result(&self.recorder, PORT, "list_robots", &page, &result);
            result
        })
    }

    fn robot_state(&self, robot_id: &str) -> ServiceFuture<'_, RobotState> {
        let robot_id = robot_id.to_string();
        Box::pin(async move {
            let result = self.inner.robot_state(&robot_id).await;
            let input = json!({ "robot_id": robot_id });
            record_result(&self.recorder, PORT, "robot_state", &input, &result);
            result
        })
    }
}
