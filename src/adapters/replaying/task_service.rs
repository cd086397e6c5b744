//! Replaying adapter for the `TaskService` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::adapters::recording::task_service::PORT;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ServiceError;
use crate::ports::task_service::{ServiceFuture, TaskService, TaskSnapshot};
use crate::task::Task;

/// Serves recorded task service results from a cassette.
///
/// Arguments are ignored; each method answers with its next recorded result.
pub struct ReplayingTaskService {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingTaskService {
    /// Creates a replaying service over `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self { replayer: Mutex::new(CassetteReplayer::new(cassette)) }
    }
}

impl TaskService for ReplayingTaskService {
    fn create_task(&self, _task: &Task) -> ServiceFuture<'_, String> {
        let result: Result<String, ServiceError> =
            next_output(&self.replayer, PORT, "create_task").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn execute_task(&self, _task_id: &str) -> ServiceFuture<'_, ()> {
        let result: Result<(), ServiceError> =
            next_output(&self.replayer, PORT, "execute_task").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn task_info(&self, _task_id: &str) -> ServiceFuture<'_, TaskSnapshot> {
        let result: Result<TaskSnapshot, ServiceError> =
            next_output(&self.replayer, PORT, "task_info").and_then(replay_result);
        Box::pin(async move { result })
    }
}
