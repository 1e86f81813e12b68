//! Month sheet layout
//!
//! Each month gets its own worksheet named `MM.YYYY`: a header row, one row
//! per day (day of month, total) and a total row whose formula sums exactly
//! that month's data rows.

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Formula, Workbook, Worksheet, XlsxError};

use crate::core::{DailyTotals, MonthSummary, ReportSummary};
use crate::report::{ReportOptions, ReportStyles};
use crate::utils::{column_name, month_key};

/// Zero-based layout: header on the second row, columns B and C
const HEADER_ROW: u32 = 1;
const FIRST_DATA_ROW: u32 = HEADER_ROW + 1;
const DAY_COLUMN: u16 = 1;
const SUM_COLUMN: u16 = 2;
const MIN_COLUMN_WIDTH: usize = 10;

/// The days of one calendar month, ascending
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthBlock {
    pub(crate) key: String,
    pub(crate) days: Vec<(NaiveDate, f64)>,
}

impl MonthBlock {
    fn total(&self) -> f64 {
        self.days.iter().map(|(_, amount)| amount).sum()
    }
}

/// Split ascending daily totals into consecutive month blocks
pub(crate) fn group_by_month(totals: &DailyTotals) -> Vec<MonthBlock> {
    let mut months: Vec<MonthBlock> = Vec::new();
    for (date, total) in totals.iter() {
        let key = month_key(date);
        match months.last_mut() {
            Some(month) if month.key == key => month.days.push((date, total)),
            _ => months.push(MonthBlock {
                key,
                days: vec![(date, total)],
            }),
        }
    }
    months
}

/// `=SUM(C3:C<last>)` over the data rows ending at zero-based `last_data_row`
fn subtotal_formula(last_data_row: u32) -> String {
    let column = column_name(usize::from(SUM_COLUMN));
    format!(
        "=SUM({column}{}:{column}{})",
        FIRST_DATA_ROW + 1,
        last_data_row + 1
    )
}

fn column_width(titles: &[&str]) -> f64 {
    let widest = titles
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH);
    (widest + 2) as f64
}

fn build_month_sheet(
    month: &MonthBlock,
    options: &ReportOptions,
    styles: &ReportStyles,
) -> Result<Worksheet, XlsxError> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(&month.key)?;
    worksheet.set_column_width(
        DAY_COLUMN,
        column_width(&[options.day_title.as_str(), options.total_title.as_str()]),
    )?;
    worksheet.set_column_width(SUM_COLUMN, column_width(&[options.sum_title.as_str()]))?;

    worksheet.write_string_with_format(HEADER_ROW, DAY_COLUMN, &options.day_title, &styles.header)?;
    worksheet.write_string_with_format(HEADER_ROW, SUM_COLUMN, &options.sum_title, &styles.header)?;

    let mut row = FIRST_DATA_ROW;
    for (date, total) in &month.days {
        worksheet.write_number_with_format(row, DAY_COLUMN, f64::from(date.day()), &styles.day)?;
        worksheet.write_number_with_format(row, SUM_COLUMN, *total, &styles.sum)?;
        row += 1;
    }

    let formula = Formula::new(subtotal_formula(row - 1)).set_result(month.total().to_string());
    worksheet.write_string_with_format(row, DAY_COLUMN, &options.total_title, &styles.total_label)?;
    worksheet.write_formula_with_format(row, SUM_COLUMN, formula, &styles.total_sum)?;

    Ok(worksheet)
}

/// Lay out the whole report in memory
pub(crate) fn build_report(
    totals: &DailyTotals,
    options: &ReportOptions,
) -> Result<(Workbook, ReportSummary), XlsxError> {
    let styles = ReportStyles::new(options.sum_format.as_deref());
    let mut workbook = Workbook::new();
    let mut summary = ReportSummary::default();

    for month in group_by_month(totals) {
        workbook.push_worksheet(build_month_sheet(&month, options, &styles)?);

        let total = month.total();
        summary.total += total;
        summary.months.push(MonthSummary {
            days: month.days.len(),
            sheet_name: month.key,
            total,
        });
    }

    Ok((workbook, summary))
}
