//! Service context selecting how the task service port is wired.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::adapters::live::{LiveRobotService, LiveTaskService};
use crate::adapters::recording::{RecordingRobotService, RecordingTaskService};
use crate::adapters::replaying::{ReplayingRobotService, ReplayingTaskService};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::client::{RobotManager, TaskManager};
use crate::config::ServiceConfig;

/// Bundles the service clients with any session recording.
pub struct ServiceContext {
    /// Client for the remote task service.
    pub tasks: TaskManager,
    /// Client for the remote robot registry.
    pub robots: RobotManager,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context talking to the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn live(config: ServiceConfig) -> Result<Self, String> {
        let robots = RobotManager::connect(config.clone()).map_err(|e| e.to_string())?;
        let tasks = TaskManager::connect(config).map_err(|e| e.to_string())?;
        Ok(Self { tasks, robots, recorder: None })
    }

    /// Creates a live context that also records every call into a cassette at `path`.
    ///
    /// The cassette is written when this context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn recording(config: ServiceConfig, path: &Path) -> Result<Self, String> {
        let endpoint = config.base_url.clone();
        let live_robots = LiveRobotService::new(config.clone()).map_err(|e| e.to_string())?;
        let live_tasks = LiveTaskService::new(config).map_err(|e| e.to_string())?;
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "robotask-session",
            endpoint,
        )));
        let tasks = RecordingTaskService::new(Box::new(live_tasks), Arc::clone(&recorder));
        let robots = RecordingRobotService::new(Box::new(live_robots), Arc::clone(&recorder));
        Ok(Self {
            tasks: TaskManager::new(Box::new(tasks)),
            robots: RobotManager::new(Box::new(robots)),
            recorder: Some(recorder),
        })
    }

    /// Creates a context that answers from a recorded cassette instead of the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            tasks: TaskManager::new(Box::new(ReplayingTaskService::new(&cassette))),
            robots: RobotManager::new(Box::new(ReplayingRobotService::new(&cassette))),
            recorder: None,
        })
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else { return };
        let saved = match recorder.lock() {
            Ok(guard) => guard.save(),
            Err(_) => {
                warn!("cassette recorder poisoned; session not saved");
                return;
            }
        };
        match saved {
            Ok(path) => info!(path = %path.display(), "recording saved"),
            Err(e) => warn!(error = %e, "failed to write cassette"),
        }
    }
}
