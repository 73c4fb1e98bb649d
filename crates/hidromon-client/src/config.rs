use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

pub const SNAPSHOT_ENV: &str = "HIDROMON_SNAPSHOT";
pub const HOME_ENV: &str = "HIDROMON_HOME";
pub const SNAPSHOT_FILE_NAME: &str = "snapshot.json";

/// Picks the store export to read: explicit path, then `HIDROMON_SNAPSHOT`,
/// then `snapshot.json` under `HIDROMON_HOME` or `~/.hidromon`.
pub fn resolve_snapshot_path(snapshot_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match snapshot_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(snapshot_path) = std::env::var_os(SNAPSHOT_ENV) {
                PathBuf::from(snapshot_path)
            } else {
                resolve_home()?.join(SNAPSHOT_FILE_NAME)
            }
        }
    };

    absolutize(&candidate)
}

pub fn resolve_home() -> ClientResult<PathBuf> {
    if let Some(override_path) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(override_path));
    }
    if let Some(home_path) = home::home_dir() {
        return Ok(home_path.join(".hidromon"));
    }
    Err(ClientError::config_unresolved("no home directory is available"))
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::config_unresolved(&error.to_string()))
}
