use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hidromon_client::history::date::parse_calendar_day;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if parse_calendar_day(value).is_none() {
        return Err("date must be a real calendar day in YYYY-MM-DD format".to_string());
    }
    Ok(IsoDate(value.to_string()))
}

pub const HISTORY_AFTER_HELP: &str = "\
How the range works:
  Both bounds are calendar days and both are inclusive.
  --from starts at 00:00:00 and --to ends at 23:59:59.
  Records keep the order they have in the snapshot.
  A --from later than --to matches nothing.

Example:
  hidromon history --from 2024-01-10 --to 2024-01-12";

#[derive(Debug, Parser)]
#[command(
    name = "hidromon",
    version,
    about = "hydroponic DFT monitoring dashboard",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show live nutrient, water level and pH readings with their alerts
    Parameters {
        /// Snapshot file to read instead of the configured one
        #[arg(long, value_name = "PATH")]
        snapshot: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Search pump and sensor history between two calendar days
    #[command(after_help = HISTORY_AFTER_HELP)]
    History {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Snapshot file to read instead of the configured one
        #[arg(long, value_name = "PATH")]
        snapshot: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::error::ErrorKind;

    use super::{Commands, IsoDate, parse_from};

    #[test]
    fn parse_parameters_flags() {
        let parsed = parse_from(["hidromon", "parameters", "--json", "--snapshot", "db.json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(cli.command, Commands::Parameters { json: true, .. }));
            if let Commands::Parameters { snapshot, .. } = cli.command {
                assert_eq!(snapshot.as_deref(), Some(Path::new("db.json")));
            }
        }
    }

    #[test]
    fn parse_history_range() {
        let parsed = parse_from([
            "hidromon",
            "history",
            "--from",
            "2024-01-10",
            "--to",
            "2024-01-12",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(cli.command, Commands::History { json: false, .. }));
            if let Commands::History { from, to, .. } = cli.command {
                assert_eq!(from, Some(IsoDate("2024-01-10".to_string())));
                assert_eq!(to.as_ref().map(IsoDate::as_str), Some("2024-01-12"));
            }
        }
    }

    #[test]
    fn history_bounds_are_optional_at_parse_time() {
        let parsed = parse_from(["hidromon", "history", "--from", "2024-01-10"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::History {
                    from: Some(_),
                    to: None,
                    ..
                }
            ));
        }
    }

    #[test]
    fn invalid_dates_are_rejected() {
        for bad in ["2024-02-30", "2024-1-10", "10-01-2024", "2024-01-10T00:00:00"] {
            let parsed = parse_from(["hidromon", "history", "--from", bad]);
            assert!(parsed.is_err());
            if let Err(error) = parsed {
                assert_eq!(error.kind(), ErrorKind::ValueValidation);
            }
        }
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["hidromon", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_help_uses_clap_display_help() {
        let parsed = parse_from(["hidromon", "history", "--help"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::DisplayHelp);
            assert!(error.to_string().contains("How the range works:"));
        }
    }
}
