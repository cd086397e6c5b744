//! End-to-end construction of a task document from points of interest.

use serde_json::json;

use robotask::task::{Action, Poi, TaskBuilder, Waypoint};

#[test]
fn two_stop_route_with_return_point() {
    let dock = Poi::new("a1", 0.0, 0.0, "dock");
    let desk = Poi::new("a1", 1.0, 1.0, "desk");

    let mut first = Waypoint::new(&dock, false);
    let mut second = Waypoint::new(&desk, false);
    second.append(Action::play_audio("X")).append(Action::pause(10));
    let mut back = Waypoint::new(&dock, false);
    back.append(Action::wait(json!({"cmd": "test"})));

    let mut builder = TaskBuilder::new("Task1", "R1").unwrap();
    builder.add_waypoint(first.clone()).add_waypoint(second).set_return_point(back);
    let task = builder.build();
    let doc = serde_json::to_value(&task).unwrap();

    assert_eq!(doc["name"], "Task1");
    assert_eq!(doc["robotId"], "R1");
    assert_eq!(doc["runType"], 21);
    assert_eq!(doc["sourceType"], 6);
    assert_eq!(doc["ignorePublicSite"], false);

    let points = doc["taskPts"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["ext"]["name"], "dock");
    assert!(points[0]["stepActs"].as_array().unwrap().is_empty());
    assert!(points[0].get("yaw").is_none());

    let acts = points[1]["stepActs"].as_array().unwrap();
    assert_eq!(acts.len(), 2);
    assert_eq!(acts[0]["type"], 5);
    assert_eq!(acts[0]["data"]["audioId"], "X");
    assert_eq!(acts[1], json!({"type": 18, "data": {"pauseTime": 10}}));

    let back_pt = &doc["backPt"];
    assert_eq!(back_pt["ext"]["name"], "dock");
    assert_eq!(back_pt["stepActs"][0], json!({"type": 40, "data": {"userData": {"cmd": "test"}}}));

    // Building again yields the same document, and later edits do not leak back.
    assert_eq!(builder.build(), task);
    first.append(Action::pause(1));
    assert!(task.waypoints()[0].actions().is_empty());
}

#[test]
fn waypoints_from_map_records_keep_heading_on_request() {
    let record = json!({
        "areaId": "a1",
        "coordinate": [2.5, -1.0, 0.0],
        "name": "lobby",
        "yaw": 90.0,
        "floor": 3
    });

    let with_heading = Waypoint::from_record(&record, true).unwrap();
    let without_heading = Waypoint::from_record(&record, false).unwrap();
    assert_eq!(with_heading.yaw(), Some(90.0));
    assert_eq!(without_heading.yaw(), None);
    assert_eq!(with_heading.position(), (2.5, -1.0));

    let task = TaskBuilder::new("Lobby run", "R2").unwrap().add_waypoint(with_heading).build();
    let doc = serde_json::to_value(&task).unwrap();
    assert_eq!(doc["taskPts"][0]["yaw"], 90.0);
    assert!(doc.get("backPt").is_none());
}
