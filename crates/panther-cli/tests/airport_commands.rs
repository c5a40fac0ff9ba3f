use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("panther-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("PANTHER_CATALOG");
    cmd
}

#[test]
fn lists_builtin_airports() {
    cli()
        .arg("airports")
        .assert()
        .success()
        .stdout(contains("Airports (31):"))
        .stdout(contains("ATL   Atlanta, GA"))
        .stdout(contains("Charles de Gaulle Airport"));
}

#[test]
fn shows_single_airport_case_insensitively() {
    cli()
        .args(["airport", "jfk"])
        .assert()
        .success()
        .stdout(contains("JFK John F. Kennedy International Airport"))
        .stdout(contains("New York City, NY"))
        .stdout(contains("New York Metro"));
}

#[test]
fn airport_json_uses_info_field_names() {
    let output = cli()
        .args(["airport", "ATL", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["iata"], "ATL");
    assert_eq!(value["state"], "GA");
    assert_eq!(value["coordinates"][0], 33.6407);
}

#[test]
fn unknown_airport_suggests_close_codes() {
    cli()
        .args(["airport", "ALT"])
        .assert()
        .failure()
        .stderr(contains("unknown airport code: ALT"))
        .stderr(contains("Did you mean 'ATL'?"));
}

#[test]
fn loads_alternate_catalog_from_flag() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("airports.csv");
    fs::write(
        &path,
        "code,name,city,state,latitude,longitude\n\
         AAA,Alpha Field,Alpha,AA,40.0,-100.0\n\
         BBB,Beta Field,Beta,BB,42.0,-100.0\n\
         CCC,Gamma Field,Gamma,CC,40.0,-90.0\n",
    )
    .expect("write catalog");

    cli()
        .arg("--catalog")
        .arg(&path)
        .arg("airports")
        .assert()
        .success()
        .stdout(contains("Airports (3):"))
        .stdout(contains("AAA"))
        .stdout(contains("ATL").not());

    cli()
        .env("PANTHER_CATALOG", &path)
        .args(["generate", "--hubs", "AAA"])
        .assert()
        .success()
        .stdout(contains("Generated 4 flights"))
        .stdout(contains("Below minimum:        1"));
}

#[test]
fn missing_catalog_file_is_reported() {
    let dir = tempdir().expect("create temp dir");
    cli()
        .env("PANTHER_CATALOG", dir.path().join("absent.csv"))
        .arg("airports")
        .assert()
        .failure()
        .stderr(contains("failed to load airport catalog"));
}
