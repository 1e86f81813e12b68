use comfy_table::Color;

use crate::core::{ReportSummary, RunOutcome};
use crate::output::format::{
    NumberFormat, create_styled_table, format_amount, format_number, header_cell, right_cell,
    styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

/// Success goes to stdout, failure to stderr
pub(crate) fn print_outcome(outcome: &RunOutcome) {
    if outcome.is_success() {
        println!("{}", outcome.message());
    } else {
        eprintln!("{}", outcome.message());
    }
}

pub(crate) fn output_outcome_json(outcome: &RunOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

pub(crate) fn print_summary_table(summary: &ReportSummary, options: TableOptions) {
    println!("{}", render_summary_table(summary, options));
}

fn render_summary_table(summary: &ReportSummary, options: TableOptions) -> String {
    let TableOptions {
        use_color,
        number_format,
    } = options;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Sheet", use_color),
        header_cell("Days", use_color),
        header_cell("Total", use_color),
    ]);

    for month in &summary.months {
        table.add_row(vec![
            styled_cell(&month.sheet_name, None, false),
            right_cell(&format_number(month.days as i64, number_format), None, false),
            right_cell(&format_amount(month.total, number_format), None, false),
        ]);
    }

    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let days: usize = summary.months.iter().map(|m| m.days).sum();
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&format_number(days as i64, number_format), cyan, true),
        right_cell(&format_amount(summary.total, number_format), cyan, true),
    ]);

    format!("\n  Monthly Totals\n\n{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonthSummary;
    use std::path::PathBuf;

    fn summary() -> ReportSummary {
        ReportSummary {
            months: vec![
                MonthSummary {
                    sheet_name: "02.2024".to_string(),
                    days: 2,
                    total: 1234.5,
                },
                MonthSummary {
                    sheet_name: "03.2024".to_string(),
                    days: 1,
                    total: 10.0,
                },
            ],
            total: 1244.5,
        }
    }

    #[test]
    fn summary_table_lists_months_and_total() {
        let out = render_summary_table(
            &summary(),
            TableOptions {
                use_color: false,
                number_format: NumberFormat::default(),
            },
        );
        assert!(out.contains("02.2024"));
        assert!(out.contains("1,234.50"));
        assert!(out.contains("TOTAL"));
        assert!(out.contains("1,244.50"));
    }

    #[test]
    fn outcome_json_is_tagged() {
        let success = RunOutcome::success(PathBuf::from("/tmp/result_1.xlsx"), summary());
        let json: serde_json::Value =
            serde_json::from_str(&output_outcome_json(&success)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["output_path"], "/tmp/result_1.xlsx");
        assert_eq!(json["summary"]["months"][0]["sheet_name"], "02.2024");

        let failure = RunOutcome::failure("No input files given");
        let json: serde_json::Value =
            serde_json::from_str(&output_outcome_json(&failure)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["message"], "No input files given");
    }
}
