use anyhow::Context;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use daymark::storage::config::Config;

mod cli;
use cli::{CliMode, USAGE, parse_cli_mode};
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    let options = match parse_cli_mode(std::env::args().skip(1)) {
        Ok(CliMode::Run(options)) => options,
        Ok(CliMode::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{USAGE}");
            return Ok(());
        }
    };

    setup_logging();

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_create().context("failed to load config")?,
    };
    if let Some(theme) = &options.theme {
        config.ui.theme = theme.clone();
    }
    if options.fade_others {
        config.ui.fade_others = true;
    }

    let theme = config.theme().context("invalid theme configuration")?;
    let first_day_of_week = config.first_day_of_week()?;
    let today = Local::now().date_naive();
    tracing::info!(theme = %theme.name, fade_others = theme.fade_others, "starting calendar");

    run_tui(today, options.month, theme, first_day_of_week).context("terminal session failed")
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "daymark.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("daymark started");
}
