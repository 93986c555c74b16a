// BookBot Entry Point
// Reads a document, runs the analysis pipeline and prints a report.

use anyhow::Result;
use bookbot_core::cli;
use bookbot_core::config::AppConfig;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging: `RUST_LOG` wins over the configured level, logs go to stderr.
fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    // Optional .env file for BOOKBOT_* settings
    dotenv::dotenv().ok();

    let cli = cli::Cli::parse();
    let config = AppConfig::from_env()?.with_overrides(
        cli.pdf_dir.clone(),
        cli.desktop_path.clone(),
        cli.log_level.clone(),
    )?;

    init_tracing(&config);
    cli::run(cli, &config)
}
