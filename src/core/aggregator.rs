//! Row aggregation
//!
//! Walks a sheet once: header rows feed the column locator, every row after the
//! header is parsed as (date, amount) and merged into the run's daily totals.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::locator::{ColumnMapping, HeaderLabels};
use crate::core::types::{Cell, DailyTotals, ScanStats, Sheet};
use crate::error::CollectError;
use crate::source::SpreadsheetReader;
use crate::utils::parse_dotted_date;

/// Result of scanning one sheet. Positions are zero-based sheet coordinates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SheetScan {
    pub(crate) sheet: String,
    /// Row that completed the header
    pub(crate) header_row: Option<usize>,
    pub(crate) mapping: ColumnMapping,
    pub(crate) stats: ScanStats,
}

/// Result of scanning every sheet of one source
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SourceScan {
    pub(crate) source: String,
    pub(crate) sheets: Vec<SheetScan>,
}

impl SourceScan {
    pub(crate) fn stats(&self) -> ScanStats {
        let mut stats = ScanStats::default();
        for sheet in &self.sheets {
            stats.add(&sheet.stats);
        }
        stats
    }
}

/// Parse one data row. Returns `None` for rows that fit neither the date-typed
/// nor the `DD.MM.YYYY` text layout, or whose amount is not a finite number.
pub(crate) fn parse_data_row(
    row: &[Cell],
    date_column: usize,
    sum_column: usize,
) -> Option<(NaiveDate, f64)> {
    let amount = row
        .get(sum_column)
        .and_then(Cell::as_number)
        .filter(|n| n.is_finite())?;

    let date = match row.get(date_column)? {
        Cell::Date(dt) => dt.date(),
        Cell::Text(text) => parse_dotted_date(text)?,
        _ => return None,
    };

    Some((date, amount))
}

/// Scan one sheet, merging every parsed row into `totals`
pub(crate) fn scan_sheet(
    sheet: &Sheet,
    labels: &HeaderLabels,
    totals: &mut DailyTotals,
) -> SheetScan {
    let mut mapping = ColumnMapping::default();
    let mut header_row = None;
    let mut stats = ScanStats::default();

    for (row_index, row) in sheet.rows.iter().enumerate() {
        let Some((date_column, sum_column)) = mapping.located() else {
            if mapping.scan_row(row, labels) {
                header_row = Some(row_index);
            }
            continue;
        };

        match parse_data_row(row, date_column, sum_column) {
            Some((date, amount)) => {
                totals.merge(date, amount);
                stats.parsed_rows += 1;
            }
            None => {
                // Blank rows are not worth counting
                if !row.iter().all(Cell::is_absent) {
                    trace!(sheet = %sheet.name, row = row_index + 1, "skipping row");
                    stats.skipped_rows += 1;
                }
            }
        }
    }

    let header_row = header_row.map(|r| r + sheet.first_row);
    let mapping = ColumnMapping {
        date_column: mapping.date_column.map(|c| c + sheet.first_column),
        sum_column: mapping.sum_column.map(|c| c + sheet.first_column),
    };
    debug!(
        sheet = %sheet.name,
        header_row = ?header_row,
        date_column = ?mapping.date_column,
        sum_column = ?mapping.sum_column,
        parsed = stats.parsed_rows,
        skipped = stats.skipped_rows,
        "scanned sheet"
    );

    SheetScan {
        sheet: sheet.name.clone(),
        header_row,
        mapping,
        stats,
    }
}

/// Scan every sheet of an opened workbook, one sheet in memory at a time
pub(crate) fn scan_source(
    reader: SpreadsheetReader,
    labels: &HeaderLabels,
    totals: &mut DailyTotals,
) -> Result<SourceScan, CollectError> {
    let source = reader.name().to_string();
    let mut sheets = Vec::new();
    for sheet in reader {
        let sheet = sheet?;
        sheets.push(scan_sheet(&sheet, labels, totals));
    }
    Ok(SourceScan { source, sheets })
}
