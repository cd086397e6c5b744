//! Replaying adapters that serve recorded interactions.

pub mod robot_service;
pub mod task_service;

pub use robot_service::ReplayingRobotService;
pub use task_service::ReplayingTaskService;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::ServiceError;

/// Pull the next recorded output for `port::method`.
///
/// A missing or exhausted recording surfaces as a transport failure so the
/// caller sees the same shape as a dropped connection.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, ServiceError> {
    let mut guard =
        replayer.lock().map_err(|_| ServiceError::Transport("replayer lock poisoned".into()))?;
    guard.next_interaction(port, method).map(|i| i.output).map_err(ServiceError::Transport)
}

/// Decode a recorded `{"Ok": v}` / `{"Err": e}` output.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, ServiceError> {
    fn decode<U: DeserializeOwned>(value: serde_json::Value) -> Result<U, ServiceError> {
        serde_json::from_value(value)
            .map_err(|e| ServiceError::Malformed(format!("unreadable cassette entry: {e}")))
    }
    match output {
        serde_json::Value::Object(mut map) => {
            if let Some(err) = map.remove("Err") {
                return Err(decode(err)?);
            }
            match map.remove("Ok") {
                Some(ok) => decode(ok),
                None => Err(ServiceError::Malformed("cassette entry has neither Ok nor Err".into())),
            }
        }
        other => Err(ServiceError::Malformed(format!("unexpected cassette entry: {other}"))),
    }
}
