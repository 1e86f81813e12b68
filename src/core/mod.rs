//! Core module - column detection, row aggregation and the shared data model

mod aggregator;
mod locator;
mod types;

pub(crate) use aggregator::{SourceScan, scan_source};
pub(crate) use locator::HeaderLabels;
pub(crate) use types::{Cell, DailyTotals, MonthSummary, ReportSummary, RunOutcome, Sheet};

#[cfg(test)]
pub(crate) use aggregator::SheetScan;
#[cfg(test)]
pub(crate) use locator::ColumnMapping;
#[cfg(test)]
pub(crate) use types::ScanStats;
