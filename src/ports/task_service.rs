//! Remote task service port.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use crate::error::ServiceError;
use crate::task::Task;

/// Boxed future type alias used by [`TaskService`] to keep the trait dyn-compatible.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// A point-in-time view of a task's server-side state.
///
/// The service reports three independent flags rather than a single state, and
/// nothing guarantees they are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    /// The task was cancelled by some other actor.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_cancel: bool,
    /// The task ran to completion.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_finish: bool,
    /// The task is currently running.
    #[serde(default, alias = "isExcute", deserialize_with = "null_as_default")]
    pub is_executing: bool,
    /// Every other field of the status record, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskSnapshot {
    /// Whether the task has reached a terminal state (finished or cancelled).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.is_finish || self.is_cancel
    }

    /// Whether more than one state flag is set at once.
    #[must_use]
    pub fn has_conflicting_flags(&self) -> bool {
        [self.is_cancel, self.is_finish, self.is_executing].into_iter().filter(|f| *f).count() > 1
    }
}

/// Creates, starts and inspects tasks on the remote service.
///
/// Every call is a single attempt; retry policy belongs to the caller.
pub trait TaskService: Send + Sync {
    /// Submits a task document and returns the identifier the service assigned.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport failure, unexpected status or malformed body.
    fn create_task(&self, task: &Task) -> ServiceFuture<'_, String>;

    /// Starts a previously created task.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport failure, unexpected status or malformed body.
    fn execute_task(&self, task_id: &str) -> ServiceFuture<'_, ()>;

    /// Fetches the current status record of a task.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport failure, unexpected status or malformed body.
    fn task_info(&self, task_id: &str) -> ServiceFuture<'_, TaskSnapshot>;
}
