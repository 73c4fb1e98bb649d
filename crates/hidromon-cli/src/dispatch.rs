use hidromon_client::commands;
use hidromon_client::commands::history::HistoryRunOptions;
use hidromon_client::commands::parameters::ParametersRunOptions;
use hidromon_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Parameters { snapshot, .. } => {
            commands::parameters::run_with_options(ParametersRunOptions {
                snapshot_override: snapshot.as_deref(),
            })
        }
        Commands::History {
            from, to, snapshot, ..
        } => commands::history::run_with_options(HistoryRunOptions {
            from: from.as_ref().map(|value| value.as_str().to_string()),
            to: to.as_ref().map(|value| value.as_str().to_string()),
            snapshot_override: snapshot.as_deref(),
        }),
    }
}
