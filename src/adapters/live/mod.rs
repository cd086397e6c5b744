//! Live adapters for real external interactions.

pub mod robot_service;
pub mod task_service;

pub use robot_service::LiveRobotService;
pub use task_service::LiveTaskService;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Header carrying the access token.
const TOKEN_HEADER: &str = "X-Token";
/// Embedded status the service uses for success.
const STATUS_OK: i64 = 200;

/// Envelope wrapping every response body.
#[derive(Deserialize)]
struct Envelope<T> {
    status: i64,
    data: Option<T>,
}

/// Builds an HTTP client bounded by the configured timeout.
pub(crate) fn http_client(config: &ServiceConfig) -> Result<Client, ServiceError> {
    Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ServiceError::Transport(format!("failed to build HTTP client: {e}")))
}

/// Appends `segments` to `root`, percent-encoding each one as a single path segment.
///
/// Identifiers never introduce extra segments: `/` is encoded, and empty, `.`
/// or `..` segments are refused.
pub(crate) fn endpoint_url(root: &str, segments: &[&str]) -> Result<Url, ServiceError> {
    if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
        return Err(ServiceError::InvalidId((*bad).to_string()));
    }
    let mut url =
        Url::parse(root).map_err(|e| ServiceError::Transport(format!("bad endpoint {root}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ServiceError::Transport(format!("endpoint {root} cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends `request` and returns the `data` member of a successful envelope.
pub(crate) async fn exchange<T: DeserializeOwned>(
    request: RequestBuilder,
    token: &str,
) -> Result<Option<T>, ServiceError> {
    let response = request.header(TOKEN_HEADER, token).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await?;
    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    if envelope.status != STATUS_OK {
        return Err(ServiceError::Rejected(envelope.status));
    }
    Ok(envelope.data)
}
