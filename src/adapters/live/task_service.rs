//! Live adapter for the `TaskService` port over HTTP.

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::{endpoint_url, exchange, http_client};
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::ports::task_service::{ServiceFuture, TaskService, TaskSnapshot};
use crate::task::Task;

/// Task service client talking to the real HTTP API.
pub struct LiveTaskService {
    client: Client,
    config: ServiceConfig,
}

impl LiveTaskService {
    /// Creates a client for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        Ok(Self { client: http_client(&config)?, config })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        endpoint_url(&self.config.task_endpoint(), segments)
    }
}

/// Payload of a successful create call.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Created {
    task_id: String,
}

impl TaskService for LiveTaskService {
    fn create_task(&self, task: &Task) -> ServiceFuture<'_, String> {
        let url = self.url(&[]);
        let body = serde_json::to_value(task);

        Box::pin(async move {
            let url = url?;
            let body =
                body.map_err(|e| ServiceError::Malformed(format!("unserializable task: {e}")))?;
            debug!(%url, "creating task");
            let created: Option<Created> =
                exchange(self.client.post(url).json(&body), &self.config.token).await?;
            created
                .map(|c| c.task_id)
                .ok_or_else(|| ServiceError::Malformed("response has no taskId".to_string()))
        })
    }

    fn execute_task(&self, task_id: &str) -> ServiceFuture<'_, ()> {
        let url = self.url(&[task_id, "execute"]);

        Box::pin(async move {
            let url = url?;
            debug!(%url, "executing task");
            exchange::<serde_json::Value>(self.client.post(url), &self.config.token).await?;
            Ok(())
        })
    }

    fn task_info(&self, task_id: &str) -> ServiceFuture<'_, TaskSnapshot> {
        let url = self.url(&[task_id]);

        Box::pin(async move {
            let url = url?;
            debug!(%url, "querying task");
            let snapshot: Option<TaskSnapshot> =
                exchange(self.client.get(url), &self.config.token).await?;
            snapshot.ok_or_else(|| ServiceError::Malformed("response has no data".to_string()))
        })
    }
}
