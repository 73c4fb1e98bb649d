use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const HISTORY_HELP_COMMAND: &str = "hidromon history --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `hidromon {cmd} --help` for usage."),
            None => "Run `hidromon --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn missing_date_range(start_day: Option<&str>, end_day: Option<&str>) -> Self {
        let mut missing = Vec::new();
        if start_day.is_none() {
            missing.push("from");
        }
        if end_day.is_none() {
            missing.push("to");
        }

        Self::new(
            "missing_date_range",
            "Missing date range: choose both a start date and an end date.",
            vec![
                "Pick a start date and an end date (YYYY-MM-DD), then search again.".to_string(),
                format!("Run `{HISTORY_HELP_COMMAND}` for usage."),
            ],
        )
        .with_data(json!({
            "missing": missing,
            "from": start_day,
            "to": end_day,
        }))
    }

    pub fn invalid_calendar_day(field_name: &str, value: &str, command: &str) -> Self {
        Self::invalid_argument_for_command(
            &format!(
                "`{field_name}` must use YYYY-MM-DD format with a real calendar date (got `{value}`)."
            ),
            Some(command),
        )
    }

    pub fn snapshot_not_found(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "snapshot_not_found",
            &format!("Cannot read store snapshot at `{location}`: {detail}"),
            vec![
                "Export the real-time database as JSON and save it to that path.".to_string(),
                "Or pass `--snapshot <path>` / set `HIDROMON_SNAPSHOT` to an existing export."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "snapshot_path": location,
        }))
    }

    pub fn snapshot_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "snapshot_invalid",
            &format!("Store snapshot at `{location}` is not a JSON object: {detail}"),
            vec![
                "Provide the full database export, e.g. {\"parameters\": {..}, \"history\": {..}}."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "snapshot_path": location,
        }))
    }

    pub fn config_unresolved(detail: &str) -> Self {
        Self::new(
            "internal_config_error",
            &format!("Could not resolve the store snapshot location: {detail}"),
            vec!["Pass `--snapshot <path>` or set `HIDROMON_SNAPSHOT`.".to_string()],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
