//! Live adapter for the `RobotService` port over HTTP.

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::{endpoint_url, exchange, http_client};
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::ports::robot_service::{Page, RobotService, RobotState, RobotSummary};
use crate::ports::task_service::ServiceFuture;

/// Robot registry client talking to the real HTTP API.
pub struct LiveRobotService {
    client: Client,
    config: ServiceConfig,
}

impl LiveRobotService {
    /// Creates a client for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        Ok(Self { client: http_client(&config)?, config })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        endpoint_url(&self.config.robot_endpoint(), segments)
    }
}

/// Payload of a successful list call.
#[derive(Deserialize)]
struct Listing {
    #[serde(default)]
    list: Vec<RobotSummary>,
}

impl RobotService for LiveRobotService {
    fn list_robots(&self, page: Page) -> ServiceFuture<'_, Vec<RobotSummary>> {
        let url = self.url(&["list"]);

        Box::pin(async move {
            let url = url?;
            debug!(%url, page_size = page.page_size, page_num = page.page_num, "listing robots");
            let listing: Option<Listing> =
                exchange(self.client.post(url).json(&page), &self.config.token).await?;
            listing
                .map(|l| l.list)
                .ok_or_else(|| ServiceError::Malformed("response has no data".to_string()))
        })
    }

    fn robot_state(&self, robot_id: &str) -> ServiceFuture<'_, RobotState> {
        let url = self.url(&[robot_id, "state"]);

        Box::pin(async move {
            let url = url?;
            debug!(%url, "querying robot state");
            let state: Option<RobotState> =
                exchange(self.client.get(url), &self.config.token).await?;
            state.ok_or_else(|| ServiceError::Malformed("response has no data".to_string()))
        })
    }
}
