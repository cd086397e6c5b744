//! Remote robot registry port.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use super::task_service::ServiceFuture;

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page of a paginated listing. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Entries per page.
    pub page_size: u32,
    /// Which page to fetch.
    pub page_num: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, page_num: 1 }
    }
}

/// A robot as it appears in the account's robot list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotSummary {
    /// Identifier to pass as a task's `robotId`.
    pub robot_id: String,
    /// Whether the robot is currently connected.
    #[serde(rename = "isOnLine", default, deserialize_with = "null_as_default")]
    pub is_online: bool,
    /// Every other field of the record, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A robot's live state record.
///
/// The service does not document a fixed schema, so the record is kept whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotState(pub Map<String, Value>);

/// Lists robots and reads their state on the remote service.
pub trait RobotService: Send + Sync {
    /// Fetches one page of the robots visible to the token.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`](crate::error::ServiceError) on transport
    /// failure, unexpected status or malformed body.
    fn list_robots(&self, page: Page) -> ServiceFuture<'_, Vec<RobotSummary>>;

    /// Fetches the current state record of one robot.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`](crate::error::ServiceError) on transport
    /// failure, unexpected status or malformed body.
    fn robot_state(&self, robot_id: &str) -> ServiceFuture<'_, RobotState>;
}
