//! Recording adapter for the `TaskService` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::task_service::{ServiceFuture, TaskService, TaskSnapshot};
use crate::task::Task;

/// Port name used for task service interactions.
pub const PORT: &str = "tasks";

/// Records task service calls while delegating to an inner implementation.
pub struct RecordingTaskService {
    inner: Box<dyn TaskService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTaskService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn TaskService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl TaskService for RecordingTaskService {
    fn create_task(&self, task: &Task) -> ServiceFuture<'_, String> {
        let task = task.clone();
        Box::pin(async move {
            let result = self.inner.create_task(&task).await;
            record_result(&self.recorder, PORT, "create_task", &task, &result);
            result
        })
    }

    fn execute_task(&self, task_id: &str) -> ServiceFuture<'_, ()> {
        let task_id = task_id.to_string();
        Box::pin(async move {
            let result = self.inner.execute_task(&task_id).await;
            record_result(&self.recorder, PORT, "execute_task", &json!({ "task_id": task_id }), &result);
            result
        })
    }

    fn task_info(&self, task_id: &str) -> ServiceFuture<'_, TaskSnapshot> {
        let task_id = task_id.to_string();
        Box::pin(async move {
            let result = self.inner.task_info(&task_id).await;
            record_result(&self.recorder, PORT, "task_info", &json!({ "task_id": task_id }), &result);
            result
        })
    }
}
