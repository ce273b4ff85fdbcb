use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dayplan")]
#[command(about = "A month calendar, a per-day task list and completion analytics in one terminal screen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    "v",
    env!("CARGO_PKG_VERSION"),
    "\nCodeName: ",
    env!("CODENAME")
))]
pub struct Cli {
    /// Day selected at startup ("2024-01-05", "tomorrow", "next monday", ...)
    #[arg(long, short = 'd', value_name = "DATE")]
    pub date: Option<String>,

    /// Category shown by the analytics panel at startup ("all", "success", "warning", "error", "info")
    #[arg(long, short = 'f', value_name = "CATEGORY")]
    pub filter: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "dayplan",
            "--date",
            "2024-01-05",
            "--log-level",
            "debug",
            "-c",
            "/tmp/dayplan.toml",
            "--filter",
            "warning",
        ]);
        assert_eq!(cli.date.as_deref(), Some("2024-01-05"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/dayplan.toml")));
        assert_eq!(cli.filter.as_deref(), Some("warning"));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["dayplan"]);
        assert!(cli.date.is_none());
        assert!(cli.config.is_none());
    }
}
