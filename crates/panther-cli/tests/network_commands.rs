use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

use panther_lib::{FlightEdge, HubSet, NetworkSnapshot};

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("panther-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("PANTHER_CATALOG");
    cmd
}

#[test]
fn generates_default_network() {
    cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(contains("Generated 488 flights"))
        .stdout(contains("Hub-to-hub pairs:     6"))
        .stdout(contains("Spoke-to-hub pairs:   104"))
        .stdout(contains("Direct spoke pairs:   134"))
        .stdout(contains("ATL -> DFW"))
        .stdout(contains("JFK -> LGA").not());
}

#[test]
fn generate_json_is_a_snapshot() {
    let output = cli()
        .args(["generate", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["flights"].as_array().unwrap().len(), 488);
    assert_eq!(value["hubs"], serde_json::json!(["ATL", "DFW", "DEN", "ORD"]));
    assert_eq!(value["statistics"]["unique_routes"], 244);
}

#[test]
fn saved_snapshot_passes_audit() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("network.json");

    cli()
        .args(["generate", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    cli()
        .args(["audit", "--snapshot"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("All flights meet the minimum distance."));
}

#[test]
fn audit_fails_on_short_flights() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("bad.json");
    let edges = vec![
        FlightEdge::direct("JFK", "LGA", 10.63),
        FlightEdge::direct("LGA", "JFK", 10.63),
    ];
    NetworkSnapshot::new(&edges, &HubSet::major(), &["JFK", "LGA"])
        .save(&path)
        .expect("save snapshot");

    cli()
        .args(["audit", "--snapshot"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("JFK -> LGA: 10.63 miles"))
        .stderr(contains("2 flight(s) below the 150-mile minimum"));
}

#[test]
fn audits_generated_network_by_default() {
    cli()
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("All flights meet"));
}

#[test]
fn lists_route_options_shortest_first() {
    cli()
        .args(["routes", "--from", "LAX", "--to", "JFK"])
        .assert()
        .success()
        .stdout(contains("Routes from LAX to JFK:"))
        .stdout(contains(" 1. LAX -> ORD -> JFK"))
        .stdout(contains(" 4. LAX -> ATL -> JFK"))
        .stdout(contains("direct").not());
}

#[test]
fn limit_truncates_route_options() {
    cli()
        .args(["routes", "--from", "hnl", "--to", "atl", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains(" 1. HNL -> ATL"))
        .stdout(contains("direct"))
        .stdout(contains(" 3. ").not());
}

#[test]
fn routes_json_lists_options() {
    let output = cli()
        .args(["routes", "--from", "LAX", "--to", "JFK", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let options = value["options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(options[0]["route_type"], "hub_connection");
    assert_eq!(options[0]["hub_used"], "ORD");
    assert_eq!(options[0]["stop_count"], 1);
}

#[test]
fn stats_report_default_network() {
    let output = cli()
        .args(["stats", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["total_flights"], 488);
    assert_eq!(value["unique_routes"], 244);
    assert_eq!(value["hub_connections"], 220);
    assert_eq!(value["airports_served"], 30);
}

#[test]
fn stricter_minimum_shrinks_network() {
    cli()
        .args(["stats", "--min-distance", "500"])
        .assert()
        .success()
        .stdout(contains("Total flights:     488").not());
}

#[test]
fn unknown_hub_is_rejected() {
    cli()
        .args(["stats", "--hubs", "ATL,XYZ"])
        .assert()
        .failure()
        .stderr(contains("hub XYZ is not present"));
}

#[test]
fn international_airports_join_on_request() {
    let output = cli()
        .args(["stats", "--include-international", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["airports_served"], 31);
}
