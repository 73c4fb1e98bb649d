use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::{TempDir, tempdir};

const EXPECTED_ROOT_HELP: &str = "Hidromon - hydroponic DFT monitoring dashboard

Usage:
  hidromon <command>

Start here:
  hidromon parameters
  hidromon history --from 2024-01-10 --to 2024-01-12
  hidromon --help
";

const SNAPSHOT: &str = r#"{
  "parameters": {"TDS": 1500, "WaterLevel": "12.5", "pH": 6.4},
  "history": {
    "-Nq1": {"time": "2024-01-09 23:59:59", "pumpType": "Pompa Nutrisi", "description": "ON", "parameterValue": 810},
    "-Nq2": {"time": "2024-01-10 00:00:00", "pumpType": "Pompa pH", "description": "", "parameterValue": 6.1},
    "-Nq3": {"pumpType": "Pompa Air"},
    "-Nq4": {"time": "2024-01-10 23:59:59", "pumpType": "", "description": "OFF", "parameterValue": "6.9"},
    "-Nq5": {"time": "2024-01-11 00:00:00", "pumpType": "Pompa Air", "description": "ON", "parameterValue": 0}
  }
}"#;

struct CliRun {
    code: Option<i32>,
    stdout: String,
}

fn snapshot_dir(body: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join("snapshot.json");
    fs::write(&path, body)?;
    Ok((dir, path))
}

fn run_cli(snapshot: &Path, args: &[&str]) -> CliRun {
    let output = Command::new(env!("CARGO_BIN_EXE_hidromon"))
        .args(args)
        .env("HIDROMON_SNAPSHOT", snapshot)
        .env_remove("RUST_LOG")
        .output();
    assert!(output.is_ok());
    match output {
        Ok(output) => CliRun {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        },
        Err(_) => CliRun {
            code: None,
            stdout: String::new(),
        },
    }
}

fn parse_json(stdout: &str) -> Value {
    let parsed: Result<Value, _> = serde_json::from_str(stdout);
    assert!(parsed.is_ok(), "stdout was not JSON: {stdout}");
    parsed.unwrap_or(Value::Null)
}

#[test]
fn no_args_prints_root_help() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(&snapshot, &[]);
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, EXPECTED_ROOT_HELP);
}

#[test]
fn parameters_json_reports_alerts() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(&snapshot, &["parameters", "--json"]);
    assert_eq!(run.code, Some(0));

    let value = parse_json(&run.stdout);
    assert_eq!(value["ok"], Value::Bool(true));
    assert_eq!(value["command"], "parameters");
    assert_eq!(value["data"]["parameters"]["nutrient"], 1500.0);
    assert_eq!(value["data"]["parameters"]["water_level"], 12.5);
    assert_eq!(value["data"]["alerts"]["nutrient"], true);
    assert_eq!(value["data"]["alerts"]["water_level"], false);
    assert_eq!(
        value["data"]["gauges"][1]["message"],
        "Kadar Nutrisi berada di luar batas aman!"
    );
}

#[test]
fn parameters_text_shows_dashboard() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(&snapshot, &["parameters"]);
    assert_eq!(run.code, Some(0));
    assert!(run.stdout.starts_with("SISTEM MONITORING HIDRO DFT\n"));
    assert!(run.stdout.contains("Kadar Nutrisi"));
    assert!(run.stdout.contains("PERINGATAN"));
}

#[test]
fn history_json_filters_inclusive_day_range() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(
        &snapshot,
        &["history", "--from", "2024-01-10", "--to", "2024-01-10", "--json"],
    );
    assert_eq!(run.code, Some(0));

    let value = parse_json(&run.stdout);
    let rows = value["data"]["rows"].as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["timestamp"], "2024-01-10 00:00:00");
    assert_eq!(rows[0]["description"], "Tidak tersedia");
    assert_eq!(rows[1]["pump_type"], "Tidak tersedia");
    assert_eq!(rows[1]["parameter_value"], "6.9");
    assert_eq!(value["data"]["total_records"], 4);
}

#[test]
fn history_text_reports_empty_range() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(
        &snapshot,
        &["history", "--from", "2023-06-01", "--to", "2023-06-30"],
    );
    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("No history in that date range."));
}

#[test]
fn history_missing_bound_is_user_error() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(&snapshot, &["history", "--from", "2024-01-10", "--json"]);
    assert_eq!(run.code, Some(1));

    let value = parse_json(&run.stdout);
    assert_eq!(value["ok"], Value::Bool(false));
    assert_eq!(value["error"]["code"], "missing_date_range");
    assert_eq!(value["data"]["missing"], serde_json::json!(["to"]));
}

#[test]
fn invalid_calendar_day_is_rejected_with_hint() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(
        &snapshot,
        &["history", "--from", "2024-02-30", "--to", "2024-03-01"],
    );
    assert_eq!(run.code, Some(1));
    assert!(run.stdout.contains("invalid_argument"));
    assert!(run.stdout.contains("Run `hidromon history --help` for usage."));
}

#[test]
fn missing_snapshot_file_is_user_error() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((dir, _snapshot)) = temp else {
        return;
    };
    let missing = dir.path().join("absent.json");
    let run = run_cli(&missing, &["parameters", "--json"]);
    assert_eq!(run.code, Some(1));

    let value = parse_json(&run.stdout);
    assert_eq!(value["error"]["code"], "snapshot_not_found");
}

#[test]
fn non_object_snapshot_is_rejected() {
    let temp = snapshot_dir("[1, 2, 3]");
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let run = run_cli(&snapshot, &["parameters", "--json"]);
    assert_eq!(run.code, Some(1));

    let value = parse_json(&run.stdout);
    assert_eq!(value["error"]["code"], "snapshot_invalid");
}

#[test]
fn snapshot_flag_overrides_environment() {
    let temp = snapshot_dir(SNAPSHOT);
    assert!(temp.is_ok());
    let Ok((_dir, snapshot)) = temp else {
        return;
    };
    let temp = snapshot_dir("{}");
    assert!(temp.is_ok());
    let Ok((other_dir, _)) = temp else {
        return;
    };
    let unused = other_dir.path().join("snapshot.json");
    let snapshot_arg = snapshot.display().to_string();
    let run = run_cli(
        &unused,
        &["parameters", "--snapshot", snapshot_arg.as_str(), "--json"],
    );
    assert_eq!(run.code, Some(0));

    let value = parse_json(&run.stdout);
    assert_eq!(value["data"]["snapshot_path"], snapshot_arg.as_str());
}
