//! Replaying adapter for the `RobotService` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::adapters::recording::robot_service::PORT;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ServiceError;
use crate::ports::robot_service::{Page, RobotService, RobotState, RobotSummary};
use crate::ports::task_service::ServiceFuture;

/// Serves recorded robot registry results from a cassette.
///
/// Arguments are ignored; each method answers with its next recorded result.
pub struct ReplayingRobotService {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRobotService {
    /// Creates a replaying service over `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self { replayer: Mutex::new(CassetteReplayer::new(cassette)) }
    }
}

impl RobotService for ReplayingRobotService {
    fn list_robots(&self, _page: Page) -> ServiceFuture<'_, Vec<RobotSummary>> {
        let result: Result<Vec<RobotSummary>, ServiceError> =
            next_output(&self.replayer, PORT, "list_robots").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn robot_state(&self, _robot_id: &str) -> ServiceFuture<'_, RobotState> {
        let result: Result<RobotState, ServiceError> =
            next_output(&self.replayer, PORT, "robot_state").and_then(replay_result);
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cassette_without_robot_calls_fails_softly() {
        let cassette = Cassette {
            name: "tasks-only".into(),
            recorded_at: chrono::Utc::now(),
            endpoint: String::new(),
            interactions: Vec::new(),
        };
        let svc = ReplayingRobotService::new(&cassette);
        assert!(svc.list_robots(Page::default()).await.unwrap_err().is_transport());
        assert!(svc.robot_state("R1").await.unwrap_err().is_transport());
    }
}
