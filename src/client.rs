//! Caller-facing service clients.
//!
//! [`TaskManager`] wraps a [`TaskService`] and [`RobotManager`] wraps a
//! [`RobotService`]. Both collapse every failure into a plain `Option`/`bool`,
//! logging what went wrong. Nothing is retried here.

use tracing::{info, warn};

use crate::adapters::live::{LiveRobotService, LiveTaskService};
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::ports::robot_service::{Page, RobotService, RobotState, RobotSummary};
use crate::ports::task_service::{TaskService, TaskSnapshot};
use crate::task::Task;

/// Creates, starts and inspects tasks, reporting failures as absent results.
pub struct TaskManager {
    service: Box<dyn TaskService>,
}

impl TaskManager {
    /// Creates a manager talking to the live service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn connect(config: ServiceConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(Box::new(LiveTaskService::new(config)?)))
    }

    /// Creates a manager over any service implementation.
    #[must_use]
    pub fn new(service: Box<dyn TaskService>) -> Self {
        Self { service }
    }

    /// Submits `task`, returning the identifier the service assigned.
    pub async fn create(&self, task: &Task) -> Option<String> {
        match self.service.create_task(task).await {
            Ok(task_id) => {
                info!(%task_id, name = task.name(), robot = task.robot_id(), "task created");
                Some(task_id)
            }
            Err(e) => {
                report("create", None, &e);
                None
            }
        }
    }

    /// Starts a created task. Returns whether the service accepted the request.
    pub async fn execute(&self, task_id: &str) -> bool {
        match self.service.execute_task(task_id).await {
            Ok(()) => {
                info!(task_id, "task executing");
                true
            }
            Err(e) => {
                report("execute", Some(task_id), &e);
                false
            }
        }
    }

    /// Fetches the task's current (not necessarily fresh) status.
    ///
    /// A missing task and a network blip look the same: `None`.
    pub async fn query(&self, task_id: &str) -> Option<TaskSnapshot> {
        match self.service.task_info(task_id).await {
            Ok(snapshot) => {
                if snapshot.has_conflicting_flags() {
                    warn!(
                        task_id,
                        is_cancel = snapshot.is_cancel,
                        is_finish = snapshot.is_finish,
                        is_executing = snapshot.is_executing,
                        "task reports more than one state flag"
                    );
                }
                Some(snapshot)
            }
            Err(e) => {
                report("query", Some(task_id), &e);
                None
            }
        }
    }
}

/// Lists robots and reads their state, reporting failures as absent results.
pub struct RobotManager {
    service: Box<dyn RobotService>,
}

impl RobotManager {
    /// Creates a manager talking to the live service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn connect(config: ServiceConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(Box::new(LiveRobotService::new(config)?)))
    }

    /// Creates a manager over any service implementation.
    #[must_use]
    pub fn new(service: Box<dyn RobotService>) -> Self {
        Self { service }
    }

    /// Fetches one page of the robot list.
    pub async fn list(&self, page: Page) -> Option<Vec<RobotSummary>> {
        match self.service.list_robots(page).await {
            Ok(robots) => {
                info!(count = robots.len(), page = page.page_num, "robots listed");
                Some(robots)
            }
            Err(e) => {
                report("list_robots", None, &e);
                None
            }
        }
    }

    /// Fetches the state record of `robot_id`.
    pub async fn state(&self, robot_id: &str) -> Option<RobotState> {
        match self.service.robot_state(robot_id).await {
            Ok(state) => Some(state),
            Err(e) => {
                report("robot_state", Some(robot_id), &e);
                None
            }
        }
    }
}

fn report(operation: &str, id: Option<&str>, error: &ServiceError) {
    warn!(
        operation,
        id = id.unwrap_or("-"),
        transport = error.is_transport(),
        %error,
        "task service call failed"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::ports::task_service::ServiceFuture;
    use crate::task::TaskBuilder;

    /// Serves queued results in order.
    #[derive(Default)]
    struct ScriptedService {
        created: Mutex<Vec<Result<String, ServiceError>>>,
        executed: Mutex<Vec<Result<(), ServiceError>>>,
        snapshots: Mutex<Vec<Result<TaskSnapshot, ServiceError>>>,
    }

    impl TaskService for ScriptedService {
        fn create_task(&self, _task: &Task) -> ServiceFuture<'_, String> {
            let next = self.created.lock().unwrap().remove(0);
            Box::pin(async move { next })
        }

        fn execute_task(&self, _task_id: &str) -> ServiceFuture<'_, ()> {
            let next = self.executed.lock().unwrap().remove(0);
            Box::pin(async move { next })
        }

        fn task_info(&self, _task_id: &str) -> ServiceFuture<'_, TaskSnapshot> {
            let next = self.snapshots.lock().unwrap().remove(0);
            Box::pin(async move { next })
        }
    }

    fn task() -> Task {
        TaskBuilder::new("Task1", "R1").unwrap().build()
    }

    #[tokio::test]
    async fn create_passes_through_assigned_id() {
        let svc = ScriptedService::default();
        svc.created.lock().unwrap().push(Ok("abc".into()));
        let manager = TaskManager::new(Box::new(svc));
        assert_eq!(manager.create(&task()).await.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn every_failure_kind_collapses() {
        let svc = ScriptedService::default();
        svc.created.lock().unwrap().push(Err(ServiceError::Rejected(500)));
        svc.executed.lock().unwrap().push(Err(ServiceError::Transport("refused".into())));
        svc.snapshots.lock().unwrap().push(Err(ServiceError::Malformed("eof".into())));
        let manager = TaskManager::new(Box::new(svc));

        assert_eq!(manager.create(&task()).await, None);
        assert!(!manager.execute("abc").await);
        assert_eq!(manager.query("abc").await, None);
    }

    #[tokio::test]
    async fn create_collapses_transport_failure() {
        let svc = ScriptedService::default();
        svc.created.lock().unwrap().push(Err(ServiceError::Transport("timed out".into())));
        let manager = TaskManager::new(Box::new(svc));
        assert_eq!(manager.create(&task()).await, None);
    }

    #[tokio::test]
    async fn conflicting_snapshot_is_returned_as_is() {
        let svc = ScriptedService::default();
        let snap = TaskSnapshot { is_cancel: true, is_finish: true, ..TaskSnapshot::default() };
        svc.snapshots.lock().unwrap().push(Ok(snap.clone()));
        let manager = TaskManager::new(Box::new(svc));
        assert_eq!(manager.query("abc").await, Some(snap));
    }

    #[test]
    fn connect_builds_live_client() {
        assert!(TaskManager::connect(ServiceConfig::new("http://127.0.0.1:1", "t")).is_ok());
        assert!(RobotManager::connect(ServiceConfig::new("http://127.0.0.1:1", "t")).is_ok());
    }

    /// Serves one fixed listing or failure.
    struct FixedRobots(Result<Vec<RobotSummary>, ServiceError>);

    impl RobotService for FixedRobots {
        fn list_robots(&self, _page: Page) -> ServiceFuture<'_, Vec<RobotSummary>> {
            let result = self.0.clone();
            Box::pin(async move { result })
        }

        fn robot_state(&self, _robot_id: &str) -> ServiceFuture<'_, RobotState> {
            let result = self.0.clone().map(|_| RobotState::default());
            Box::pin(async move { result })
        }
    }

    #[tokio::test]
    async fn robot_calls_pass_results_through() {
        let robot = RobotSummary { robot_id: "R1".into(), ..RobotSummary::default() };
        let manager = RobotManager::new(Box::new(FixedRobots(Ok(vec![robot.clone()]))));
        assert_eq!(manager.list(Page::default()).await, Some(vec![robot]));
        assert_eq!(manager.state("R1").await, Some(RobotState::default()));
    }

    #[tokio::test]
    async fn robot_failures_collapse() {
        let failing = FixedRobots(Err(ServiceError::Transport("refused".into())));
        let manager = RobotManager::new(Box::new(failing));
        assert_eq!(manager.list(Page::default()).await, None);
        assert_eq!(manager.state("R1").await, None);
    }
}
