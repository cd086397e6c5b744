//! Record-replay round-trip integration test.
//!
//! 1. Record a task lifecycle with `CassetteRecorder`.
//! 2. Replay it through `ServiceContext::replaying()`: create, execute, watch.
//! 3. Replay a second time and assert determinism.

use std::time::Duration;

use serde_json::json;

use robotask::cassette::recorder::CassetteRecorder;
use robotask::context::ServiceContext;
use robotask::ports::TaskSnapshot;
use robotask::task::{Action, Poi, TaskBuilder, Waypoint};
use robotask::watch::{watch, PollPolicy, WatchOutcome};

fn strict() -> PollPolicy {
    PollPolicy { interval: Duration::ZERO, ..PollPolicy::default() }
}

/// Drives one task through its lifecycle, returning everything observed.
async fn exercise_lifecycle(
    ctx: &ServiceContext,
    policy: PollPolicy,
) -> (Option<String>, bool, Vec<TaskSnapshot>, WatchOutcome) {
    let mut waypoint = Waypoint::new(&Poi::new("a1", 1.0, 1.0, "m2"), false);
    waypoint.append(Action::pause(3));
    let task = TaskBuilder::new("Task1", "R1").unwrap().add_waypoint(waypoint).build();

    let task_id = ctx.tasks.create(&task).await;
    let id = task_id.clone().unwrap_or_default();
    let started = ctx.tasks.execute(&id).await;

    let mut seen = Vec::new();
    let outcome = watch(&ctx.tasks, &id, policy, |snapshot| seen.push(snapshot.clone())).await;
    (task_id, started, seen, outcome)
}

#[tokio::test]
async fn record_then_replay_produces_identical_outputs() {
    let dir = std::env::temp_dir().join("robotask_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("lifecycle.cassette.yaml");

    // --- Phase 1: record the interactions a live session would produce ---
    let mut recorder =
        CassetteRecorder::new(&cassette_path, "lifecycle", "http://robots.local/task/v1.1");
    recorder.record("tasks", "create_task", json!({"name": "Task1"}), json!({"Ok": "task-42"}));
    recorder.record("tasks", "execute_task", json!({"task_id": "task-42"}), json!({"Ok": null}));
    recorder.record(
        "tasks",
        "task_info",
        json!({"task_id": "task-42"}),
        json!({"Err": {"kind": "transport", "detail": "connection reset"}}),
    );
    recorder.record(
        "tasks",
        "task_info",
        json!({"task_id": "task-42"}),
        json!({"Ok": {"isCancel": false, "isFinish": false, "isExcute": true, "progress": 40}}),
    );
    recorder.record(
        "tasks",
        "task_info",
        json!({"task_id": "task-42"}),
        json!({"Ok": {"isCancel": false, "isFinish": true, "isExecuting": false}}),
    );
    let written_path = recorder.finish().expect("recording should succeed");
    assert_eq!(written_path, cassette_path);

    // --- Phase 2: replay with a failure budget that tolerates the transport blip ---
    let ctx1 = ServiceContext::replaying(&cassette_path).unwrap();
    let tolerant =
        PollPolicy { interval: Duration::ZERO, max_consecutive_failures: 2, max_polls: None };
    let (task_id, started, seen, outcome) = exercise_lifecycle(&ctx1, tolerant).await;

    assert_eq!(task_id.as_deref(), Some("task-42"));
    assert!(started);
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_executing);
    assert_eq!(seen[0].extra["progress"], 40);
    match outcome {
        WatchOutcome::Settled(snapshot) => assert!(snapshot.is_finish && !snapshot.is_cancel),
        other => panic!("unexpected outcome {other:?}"),
    }

    // --- Phase 3: the default policy stops on the first failed query ---
    let ctx2 = ServiceContext::replaying(&cassette_path).unwrap();
    let (task_id2, started2, seen2, outcome2) = exercise_lifecycle(&ctx2, strict()).await;
    assert_eq!(task_id2.as_deref(), Some("task-42"));
    assert!(started2);
    assert!(seen2.is_empty());
    assert_eq!(outcome2, WatchOutcome::QueryFailed { failures: 1 });

    // --- Phase 4: replaying again is deterministic ---
    let ctx3 = ServiceContext::replaying(&cassette_path).unwrap();
    let third = exercise_lifecycle(&ctx3, strict()).await;
    assert_eq!(third, (task_id2, started2, seen2, outcome2));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn exhausted_cassette_reports_failures_instead_of_panicking() {
    let dir = std::env::temp_dir().join("robotask_exhausted_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("empty.cassette.yaml");
    CassetteRecorder::new(&cassette_path, "empty", "").finish().unwrap();

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let (task_id, started, seen, outcome) = exercise_lifecycle(&ctx, strict()).await;
    assert_eq!(task_id, None);
    assert!(!started);
    assert!(seen.is_empty());
    assert_eq!(outcome, WatchOutcome::QueryFailed { failures: 1 });

    let _ = std::fs::remove_dir_all(&dir);
}
