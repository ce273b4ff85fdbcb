use chrono::Local;
use clap::Parser;
use tracing::{error, info};

use dayplan_core::CategoryFilter;
use dayplan_core::date::parse_date;

use crate::app::ViewSettings;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::Result;
use crate::logging::init_logging;

mod app;
mod cli;
mod config;
mod error;
mod logging;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = AppConfig::load(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&cfg.logging.level);
    let log_file = cli.log_file.clone().unwrap_or_else(|| cfg.log_file());
    let _guard = init_logging(level, &log_file)?;

    let selected_date = match cli.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let filter: CategoryFilter = match cli.filter.as_deref() {
        Some(raw) => raw.parse()?,
        None => CategoryFilter::All,
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        codename = env!("CODENAME"),
        log_file = %log_file.display(),
        "starting dayplan"
    );

    let result = app::run_tui(ViewSettings::from(&cfg), selected_date, filter);
    if let Err(e) = &result {
        error!(error = %e, "dayplan exited with an error");
    }
    result
}
