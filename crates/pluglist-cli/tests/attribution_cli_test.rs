mod common;

use common::pluglist;
use pluglist_runtime::{AttributionConfig, Config, RecordedResponse};
use pluglist_testing::TestWorld;
use pluglist_testing::fixtures::{attribution_details, payload, settings};
use predicates::prelude::*;
use serde_json::json;

fn no_delay() -> Config {
    Config {
        attribution: AttributionConfig {
            retry_delay_secs: 0,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn run_json(world: &TestWorld, responses: &std::path::Path) -> serde_json::Value {
    let output = pluglist(world)
        .args(["--format", "json", "attribution", "run", "--response"])
        .arg(responses)
        .output()
        .expect("Failed to run attribution run");
    assert!(
        output.status.success(),
        "attribution run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_run_retries_until_details_arrive() {
    let world = TestWorld::new().with_config(&no_delay());
    let responses = world
        .write_responses(
            "responses.json",
            &[
                RecordedResponse::transient("offline"),
                RecordedResponse::transient("offline"),
                attribution_details(json!({"iad-campaign-id": "1234", "iad-attribution": true})),
            ],
        )
        .unwrap();

    let json = run_json(&world, &responses);

    assert_eq!(json["outcome"], "sent");
    assert_eq!(json["details_sent"], true);
    assert_eq!(json["tracking_limited"], false);

    let events = world.events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "searchads_attribution_detail_received");
    assert_eq!(events[0]["properties"]["iad_campaign_id"], "1234");
    assert_eq!(events[0]["properties"]["iad_attribution"], "true");

    let persisted = world.settings().unwrap();
    assert!(persisted.details_sent());
}

#[test]
fn test_run_creates_missing_data_dir() {
    let world = TestWorld::new();
    let responses = world
        .write_responses(
            "responses.json",
            &[attribution_details(json!({"iad-org-name": "Example"}))],
        )
        .unwrap();
    std::fs::remove_dir_all(world.data_dir()).unwrap();

    assert_eq!(run_json(&world, &responses)["outcome"], "sent");

    let events = world.events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["properties"]["iad_org_name"], "Example");
    assert!(world.settings().unwrap().details_sent());
}

#[test]
fn test_second_run_sends_nothing() {
    let world = TestWorld::new().with_config(&no_delay());
    let responses = world
        .write_responses(
            "responses.json",
            &[attribution_details(json!({"iad-org-name": "Example"}))],
        )
        .unwrap();

    assert_eq!(run_json(&world, &responses)["outcome"], "sent");
    assert_eq!(run_json(&world, &responses)["outcome"], "already_sent");
    assert_eq!(world.events().unwrap().len(), 1);
}

#[test]
fn test_run_records_limited_tracking() {
    let world = TestWorld::new().with_config(&no_delay());
    let responses = world
        .write_responses("responses.json", &[RecordedResponse::limited()])
        .unwrap();

    let json = run_json(&world, &responses);

    assert_eq!(json["outcome"], "tracking_limited");
    assert_eq!(json["tracking_limited"], true);
    assert!(world.events().unwrap().is_empty());
    assert!(world.settings().unwrap().tracking_limited());
}

#[test]
fn test_run_with_limited_flag_makes_no_request() {
    let world = TestWorld::new()
        .with_config(&no_delay())
        .with_settings(settings(true, false));
    let responses = world
        .write_responses(
            "responses.json",
            &[attribution_details(json!({"iad-org-name": "Example"}))],
        )
        .unwrap();

    assert_eq!(run_json(&world, &responses)["outcome"], "already_limited");
    assert!(world.events().unwrap().is_empty());
}

#[test]
fn test_run_without_version_key_leaves_flags_unset() {
    let world = TestWorld::new().with_config(&no_delay());
    let responses = world
        .write_responses(
            "responses.json",
            &[payload(json!({"Version2.0": {"iad-org-name": "Example"}}))],
        )
        .unwrap();

    let json = run_json(&world, &responses);

    assert_eq!(json["outcome"], "payload_missing");
    assert_eq!(json["details_sent"], false);
    assert!(world.events().unwrap().is_empty());
}

#[test]
fn test_simulator_environment_skips_run() {
    let world = TestWorld::new()
        .with_config(&no_delay())
        .with_env("PLUGLIST_ENVIRONMENT", "simulator");
    let responses = world
        .write_responses(
            "responses.json",
            &[attribution_details(json!({"iad-org-name": "Example"}))],
        )
        .unwrap();

    assert_eq!(run_json(&world, &responses)["outcome"], "test_environment");
    assert!(!world.settings().unwrap().details_sent());
}

#[test]
fn test_run_with_missing_response_file_fails() {
    let world = TestWorld::new();

    pluglist(&world)
        .args(["attribution", "run", "--response"])
        .arg(world.temp_dir().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load responses"));
}

#[test]
fn test_status_reports_flags() {
    let world = TestWorld::new().with_settings(settings(false, true));

    pluglist(&world)
        .args(["attribution", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking limited: no"))
        .stdout(predicate::str::contains("Details sent:     yes"));
}

#[test]
fn test_status_json_defaults_to_unset() {
    let world = TestWorld::new();

    let output = pluglist(&world)
        .args(["--format", "json", "attribution", "status"])
        .output()
        .expect("Failed to run attribution status");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, json!({"tracking_limited": false, "details_sent": false}));
}
