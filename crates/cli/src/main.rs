mod app;
mod table;
mod theme;

use anyhow::Result;
use std::fs::{self, OpenOptions};

use busfleet_core::config::{self, AppConfig};
use theme::Theme;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;

    let theme = Theme::new(config.use_colors);
    match app::BusApp::setup(&config, theme)? {
        Some(mut app) => app.run(),
        // input ended before the fleet was configured
        None => Ok(()),
    }
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("busfleet.log");

    let env_filter = EnvFilter::from_default_env();

    // stdout carries the interactive prompts, so logs go to the file only
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
