//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::collector::EmptyCheck;
use crate::config::Config;
use crate::core::HeaderLabels;
use crate::error::AppError;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum LogLevel {
    Off,
    Error,
    /// Default
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser)]
#[command(name = "txcollect")]
#[command(
    about = "Collect daily transaction totals from spreadsheets into a monthly report",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Header text of the date column (matched case-insensitively)
    #[arg(short, long, global = true, value_name = "LABEL")]
    pub(crate) date_column: Option<String>,

    /// Header text of the amount column (matched case-insensitively)
    #[arg(short, long, global = true, value_name = "LABEL")]
    pub(crate) sum_column: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug logging (shorthand for --log-level debug)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Log level for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub(crate) log_level: Option<LogLevel>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.date_column.is_none() {
            self.date_column = config.date_column.clone();
        }
        if self.sum_column.is_none() {
            self.sum_column = config.sum_column.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Commands::Collect(args) = &mut self.command {
            if args.day_title.is_none() {
                args.day_title = config.day_title.clone();
            }
            if args.sum_title.is_none() {
                args.sum_title = config.sum_title.clone();
            }
            if args.total_title.is_none() {
                args.total_title = config.total_title.clone();
            }
            if args.output_dir.is_none() {
                args.output_dir = config.output_dir.clone();
            }
            if args.sum_format.is_none() {
                args.sum_format = config.sum_format.clone();
            }
            if !args.strict && config.empty_check == Some(EmptyCheck::Source) {
                args.strict = true;
            }
            if !args.summary && config.summary {
                args.summary = true;
            }
        }

        self
    }

    /// Both header labels; an empty label counts as missing
    pub(crate) fn labels(&self) -> Result<HeaderLabels, AppError> {
        let date = self
            .date_column
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or(AppError::MissingLabel {
                label: "date column",
                flag: "--date-column",
            })?;
        let sum = self
            .sum_column
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or(AppError::MissingLabel {
                label: "sum column",
                flag: "--sum-column",
            })?;
        Ok(HeaderLabels::new(date, sum))
    }

    pub(crate) fn log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level.unwrap_or_default()
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
