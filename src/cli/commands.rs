//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::collector::EmptyCheck;
use crate::consts::{DEFAULT_DAY_TITLE, DEFAULT_SUM_TITLE, DEFAULT_TOTAL_TITLE};
use crate::report::ReportOptions;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Aggregate the inputs and write the monthly report
    Collect(CollectArgs),
    /// Show detected columns and row counts per sheet; writes nothing
    Inspect(InspectArgs),
}

#[derive(Args)]
pub(crate) struct CollectArgs {
    /// Spreadsheets (xlsx, xlsm, xlsb, xls, ods), zip archives or glob patterns
    #[arg(required = true, value_name = "FILES")]
    pub(crate) inputs: Vec<String>,

    /// Directory for the report (default: directory of the first input)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Title of the day column in the report
    #[arg(long, value_name = "TEXT")]
    pub(crate) day_title: Option<String>,

    /// Title of the sum column in the report
    #[arg(long, value_name = "TEXT")]
    pub(crate) sum_title: Option<String>,

    /// Label of each month's total row
    #[arg(long, value_name = "TEXT")]
    pub(crate) total_title: Option<String>,

    /// Excel number format for amounts (e.g., "#,##0.00")
    #[arg(long, value_name = "FMT")]
    pub(crate) sum_format: Option<String>,

    /// Fail when any single spreadsheet yields no rows
    #[arg(long)]
    pub(crate) strict: bool,

    /// Print a per-month summary table after the report is written
    #[arg(long)]
    pub(crate) summary: bool,
}

impl CollectArgs {
    pub(crate) fn report_options(&self) -> ReportOptions {
        ReportOptions {
            day_title: self
                .day_title
                .clone()
                .unwrap_or_else(|| DEFAULT_DAY_TITLE.to_string()),
            sum_title: self
                .sum_title
                .clone()
                .unwrap_or_else(|| DEFAULT_SUM_TITLE.to_string()),
            total_title: self
                .total_title
                .clone()
                .unwrap_or_else(|| DEFAULT_TOTAL_TITLE.to_string()),
            sum_format: self.sum_format.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    pub(crate) fn empty_check(&self) -> EmptyCheck {
        if self.strict {
            EmptyCheck::Source
        } else {
            EmptyCheck::Run
        }
    }
}

#[derive(Args)]
pub(crate) struct InspectArgs {
    /// Spreadsheets, zip archives or glob patterns
    #[arg(required = true, value_name = "FILES")]
    pub(crate) inputs: Vec<String>,
}
