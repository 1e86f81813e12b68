//! Core data types shared by the reader, the aggregator and the report builder

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A typed spreadsheet cell. Anything that is not text, a number or a date is `Absent`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Absent,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl Cell {
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub(crate) fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }
}

/// One worksheet of a parsed workbook. `rows` covers the used range only;
/// `first_row`/`first_column` give its zero-based position in the sheet.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sheet {
    pub(crate) name: String,
    pub(crate) first_row: usize,
    pub(crate) first_column: usize,
    pub(crate) rows: Vec<Vec<Cell>>,
}

/// Per-day totals accumulated over a whole run, ordered by date
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct DailyTotals {
    days: BTreeMap<NaiveDate, f64>,
}

impl DailyTotals {
    /// Additive merge: an absent day starts at `amount`
    pub(crate) fn merge(&mut self, date: NaiveDate, amount: f64) {
        self.days
            .entry(date)
            .and_modify(|total| *total += amount)
            .or_insert(amount);
    }

    #[cfg(test)]
    pub(crate) fn get(&self, date: NaiveDate) -> Option<f64> {
        self.days.get(&date).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.days.iter().map(|(date, total)| (*date, *total))
    }
}

/// Row counters for one sheet or one source
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ScanStats {
    pub(crate) parsed_rows: usize,
    pub(crate) skipped_rows: usize,
}

impl ScanStats {
    pub(crate) fn add(&mut self, other: &ScanStats) {
        self.parsed_rows += other.parsed_rows;
        self.skipped_rows += other.skipped_rows;
    }
}

/// Report totals for one month sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MonthSummary {
    pub(crate) sheet_name: String,
    pub(crate) days: usize,
    pub(crate) total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct ReportSummary {
    pub(crate) months: Vec<MonthSummary>,
    pub(crate) total: f64,
}

/// Terminal result of one collection run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum RunOutcome {
    Success {
        output_path: PathBuf,
        message: String,
        summary: ReportSummary,
    },
    Failure {
        message: String,
    },
}

impl RunOutcome {
    pub(crate) fn success(output_path: PathBuf, summary: ReportSummary) -> Self {
        let message = format!("Report '{}' is successfully created!", output_path.display());
        RunOutcome::Success {
            output_path,
            message,
            summary,
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        RunOutcome::Failure {
            message: message.into(),
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }

    pub(crate) fn message(&self) -> &str {
        match self {
            RunOutcome::Success { message, .. } | RunOutcome::Failure { message } => message,
        }
    }
}
