//! Caller-side polling of a running task.
//!
//! The status endpoint is not real-time, so this only ever sees snapshots that
//! may lag the robot by an unknown amount.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::client::TaskManager;
use crate::ports::task_service::TaskSnapshot;

/// How often to poll and when to give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Pause before each query.
    pub interval: Duration,
    /// Consecutive failed queries tolerated before giving up. `1` stops on the
    /// first failure.
    pub max_consecutive_failures: u32,
    /// Total queries allowed, or `None` to poll until settled.
    pub max_polls: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { interval: Duration::from_secs(1), max_consecutive_failures: 1, max_polls: None }
    }
}

/// Why polling stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchOutcome {
    /// The task reported finished or cancelled. Flags are left as reported.
    Settled(TaskSnapshot),
    /// The failure budget ran out.
    QueryFailed {
        /// Consecutive failures observed.
        failures: u32,
    },
    /// The poll cap was reached before the task settled.
    PollLimit {
        /// Queries issued.
        polls: u32,
        /// The most recent successful snapshot, if any.
        last: Option<TaskSnapshot>,
    },
}

/// Polls `task_id` until it settles or `policy` says stop.
///
/// `on_snapshot` sees every successful snapshot, including the settling one.
pub async fn watch<F>(
    manager: &TaskManager,
    task_id: &str,
    policy: PollPolicy,
    mut on_snapshot: F,
) -> WatchOutcome
where
    F: FnMut(&TaskSnapshot),
{
    let mut polls = 0u32;
    let mut failures = 0u32;
    let mut last = None;

    loop {
        if policy.max_polls.is_some_and(|cap| polls >= cap) {
            info!(task_id, polls, "poll limit reached");
            return WatchOutcome::PollLimit { polls, last };
        }

        tokio::time::sleep(policy.interval).await;
        polls += 1;

        match manager.query(task_id).await {
            Some(snapshot) => {
                failures = 0;
                debug!(
                    task_id,
                    is_cancel = snapshot.is_cancel,
                    is_finish = snapshot.is_finish,
                    is_executing = snapshot.is_executing,
                    "task status"
                );
                on_snapshot(&snapshot);
                if snapshot.is_settled() {
                    info!(task_id, polls, "task settled");
                    return WatchOutcome::Settled(snapshot);
                }
                last = Some(snapshot);
            }
            None => {
                failures += 1;
                if failures >= policy.max_consecutive_failures.max(1) {
                    warn!(task_id, failures, "giving up on task status");
                    return WatchOutcome::QueryFailed { failures };
                }
            }
        }
    }
}
