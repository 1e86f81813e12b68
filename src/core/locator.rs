//! Header detection
//!
//! Finds the date and sum columns of a sheet by comparing text cells with the
//! configured labels. The header may sit on any row.

use serde::Serialize;

use crate::core::types::Cell;

/// Configured header labels, compared case-insensitively
#[derive(Debug, Clone)]
pub(crate) struct HeaderLabels {
    date: String,
    sum: String,
}

impl HeaderLabels {
    pub(crate) fn new(date: &str, sum: &str) -> Self {
        Self {
            date: date.to_lowercase(),
            sum: sum.to_lowercase(),
        }
    }

    fn is_date(&self, text: &str) -> bool {
        text.to_lowercase() == self.date
    }

    fn is_sum(&self, text: &str) -> bool {
        text.to_lowercase() == self.sum
    }
}

/// Column indices of one sheet. Data rows are read only once both are known.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ColumnMapping {
    pub(crate) date_column: Option<usize>,
    pub(crate) sum_column: Option<usize>,
}

impl ColumnMapping {
    /// Both columns, once located
    pub(crate) fn located(&self) -> Option<(usize, usize)> {
        self.date_column.zip(self.sum_column)
    }

    /// Look for header cells in `row`. A recorded column is never replaced, and a
    /// single cell claims at most one role, the date role first.
    /// Returns true once both columns are located.
    pub(crate) fn scan_row(&mut self, row: &[Cell], labels: &HeaderLabels) -> bool {
        for (index, cell) in row.iter().enumerate() {
            if self.located().is_some() {
                break;
            }
            let Some(text) = cell.as_text() else {
                continue;
            };
            if self.date_column.is_none() && labels.is_date(text) {
                self.date_column = Some(index);
            } else if self.sum_column.is_none() && labels.is_sum(text) {
                self.sum_column = Some(index);
            }
        }
        self.located().is_some()
    }
}
