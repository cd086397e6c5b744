//! Port traits defining external boundaries.
//!
//! The remote service exposes two resources, tasks and robots; each gets its
//! own port. Implementations live in `src/adapters/`.

pub mod robot_service;
pub mod task_service;

pub use robot_service::{Page, RobotService, RobotState, RobotSummary};
pub use task_service::{ServiceFuture, TaskService, TaskSnapshot};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
