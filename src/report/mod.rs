//! Report generation: one worksheet per month with a subtotal formula

mod builder;
mod style;
mod writer;

use std::path::PathBuf;

use crate::consts::{DEFAULT_DAY_TITLE, DEFAULT_SUM_TITLE, DEFAULT_TOTAL_TITLE};

pub(crate) use builder::build_report;
pub(crate) use style::ReportStyles;
pub(crate) use writer::write_report;

/// Titles and placement of the generated report
#[derive(Debug, Clone)]
pub(crate) struct ReportOptions {
    pub(crate) day_title: String,
    pub(crate) sum_title: String,
    pub(crate) total_title: String,
    /// Excel number format for amount cells, e.g. "#,##0.00"
    pub(crate) sum_format: Option<String>,
    /// Defaults to the directory of the first input
    pub(crate) output_dir: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            day_title: DEFAULT_DAY_TITLE.to_string(),
            sum_title: DEFAULT_SUM_TITLE.to_string(),
            total_title: DEFAULT_TOTAL_TITLE.to_string(),
            sum_format: None,
            output_dir: None,
        }
    }
}
