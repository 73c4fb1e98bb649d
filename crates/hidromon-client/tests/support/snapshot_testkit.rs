#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

pub const DEFAULT_SNAPSHOT: &str = r#"{
  "parameters": {"TDS": 820, "WaterLevel": 14.5, "pH": 6.3},
  "history": {
    "-NqA1": {"time": "2024-01-09 23:59:59", "pumpType": "Pompa Air", "description": "ON", "parameterValue": 3},
    "-NqA2": {"time": "2024-01-10 00:00:00", "pumpType": "Pompa Nutrisi", "description": "ON", "parameterValue": 640},
    "-NqA3": {"pumpType": "Pompa pH", "description": "no timestamp"},
    "-NqA4": {"time": "", "pumpType": "Pompa pH"},
    "-NqA5": {"time": "2024-01-10 23:59:59", "description": "OFF", "parameterValue": "6.9"},
    "-NqA6": {"time": "2024-01-11 00:00:00", "pumpType": "Pompa Air", "parameterValue": 0},
    "-NqA7": {"time": "10/01/2024 12:00", "pumpType": "Pompa Air"}
  }
}"#;

pub fn temp_snapshot(body: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join("snapshot.json");
    fs::write(&path, body)?;
    Ok((dir, path))
}

pub fn missing_snapshot_path(dir: &Path) -> PathBuf {
    dir.join("does-not-exist.json")
}
