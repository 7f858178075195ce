use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ethiopic, Coptic and Gregorian date converter.
#[derive(Parser)]
#[command(
    name = "ethcal",
    version,
    about = "Convert dates between the Ethiopic, Coptic and Gregorian calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./ethcal.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a day/month/year date from one calendar to another.
    Convert(ConvertArgs),
    /// Print the Julian Day Number of a date.
    ToJdn(ToJdnArgs),
    /// Print the date of a Julian Day Number.
    FromJdn(FromJdnArgs),
    /// Print today's date.
    Today(TodayArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date in day/month/year form.
    pub date: String,

    /// Source calendar (ethiopic, coptic, gregorian).
    #[arg(short, long)]
    pub from: String,

    /// Target calendar (ethiopic, coptic, gregorian).
    #[arg(short, long)]
    pub to: String,

    /// Ethiopic era (auto, amete-mihret, amete-alem). Overrides the config.
    #[arg(short, long)]
    pub era: Option<String>,

    /// Output format (slash, short, long, month-year). Overrides the config.
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for the `to-jdn` subcommand.
#[derive(clap::Args)]
pub struct ToJdnArgs {
    /// Date in day/month/year form.
    pub date: String,

    /// Calendar the date is in.
    #[arg(long, default_value = "ethiopic")]
    pub calendar: String,

    /// Ethiopic era (auto, amete-mihret, amete-alem). Overrides the config.
    #[arg(short, long)]
    pub era: Option<String>,
}

/// Arguments for the `from-jdn` subcommand.
#[derive(clap::Args)]
pub struct FromJdnArgs {
    /// Julian Day Number.
    #[arg(allow_negative_numbers = true)]
    pub jdn: i64,

    /// Calendar to express the day in.
    #[arg(long, default_value = "ethiopic")]
    pub calendar: String,

    /// Ethiopic era (auto, amete-mihret, amete-alem). Overrides the config.
    #[arg(short, long)]
    pub era: Option<String>,

    /// Output format (slash, short, long, month-year). Overrides the config.
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Calendar to show today's date in.
    #[arg(long, default_value = "ethiopic")]
    pub calendar: String,

    /// Output format (slash, short, long, month-year). Defaults to long.
    #[arg(long)]
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_convert() {
        let cli = Cli::try_parse_from([
            "ethcal", "-vv", "convert", "1/1/2008", "--from", "ethiopic", "--to", "gregorian",
            "--era", "am",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.date, "1/1/2008");
                assert_eq!(args.from, "ethiopic");
                assert_eq!(args.to, "gregorian");
                assert_eq!(args.era.as_deref(), Some("am"));
                assert!(args.format.is_none());
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn parse_from_jdn_negative() {
        let cli = Cli::try_parse_from(["ethcal", "from-jdn", "-285019", "--calendar", "gc"])
            .unwrap();
        match cli.command {
            Command::FromJdn(args) => {
                assert_eq!(args.jdn, -285019);
                assert_eq!(args.calendar, "gc");
            }
            _ => panic!("expected from-jdn"),
        }
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["ethcal", "today", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
