use std::path::Path;

use crate::ClientResult;
use crate::config::resolve_snapshot_path;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ParametersData;
use crate::screens::HomeScreen;
use crate::store::SnapshotStore;

#[derive(Debug, Default)]
pub struct ParametersRunOptions<'a> {
    pub snapshot_override: Option<&'a Path>,
}

pub fn run() -> ClientResult<SuccessEnvelope> {
    run_with_options(ParametersRunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(options: ParametersRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let snapshot_path = resolve_snapshot_path(options.snapshot_override)?;
    let store = SnapshotStore::load(&snapshot_path)?;

    let screen = HomeScreen::mount(&store);
    let view = screen.unmount();

    let data = ParametersData {
        snapshot_path: snapshot_path.display().to_string(),
        gauges: view.gauges(),
        parameters: view.parameters,
        alerts: view.alerts,
    };

    success("parameters", data)
}
