mod app;
mod cli;
mod collector;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod report;
mod source;
#[cfg(test)]
mod testutil;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, LogLevel};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_level = cli.log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.as_filter());

    let config = Config::load();
    let cli = cli.with_config(&config);
    app::run(&cli)
}

/// Initializes the tracing subscriber. RUST_LOG, when set, replaces the CLI level.
fn init_logger(level: LogLevel) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            level.as_filter()
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
