use comfy_table::Color;

use crate::core::SourceScan;
use crate::output::format::{
    create_styled_table, format_number, header_cell, right_cell, styled_cell,
};
use crate::output::outcome::TableOptions;
use crate::utils::column_name;

fn position(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub(crate) fn print_inspection_table(scans: &[SourceScan], options: TableOptions) {
    println!("{}", render_inspection_table(scans, options));
}

fn render_inspection_table(scans: &[SourceScan], options: TableOptions) -> String {
    let TableOptions {
        use_color,
        number_format,
    } = options;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Source", use_color),
        header_cell("Sheet", use_color),
        header_cell("Header", use_color),
        header_cell("Date", use_color),
        header_cell("Sum", use_color),
        header_cell("Parsed", use_color),
        header_cell("Skipped", use_color),
    ]);

    let warn = if use_color { Some(Color::Yellow) } else { None };
    let mut sheets = 0usize;
    for scan in scans {
        for sheet in &scan.sheets {
            sheets += 1;
            // Sheets without a complete header contribute nothing
            let color = if sheet.mapping.located().is_none() {
                warn
            } else {
                None
            };
            table.add_row(vec![
                styled_cell(&scan.source, None, false),
                styled_cell(&sheet.sheet, color, false),
                right_cell(&position(sheet.header_row.map(|r| (r + 1).to_string())), color, false),
                right_cell(&position(sheet.mapping.date_column.map(column_name)), color, false),
                right_cell(&position(sheet.mapping.sum_column.map(column_name)), color, false),
                right_cell(&format_number(sheet.stats.parsed_rows as i64, number_format), None, false),
                right_cell(&format_number(sheet.stats.skipped_rows as i64, number_format), None, false),
            ]);
        }
    }

    format!(
        "\n  Input Inspection\n\n{table}\n\n  {} sources, {} sheets\n",
        format_number(scans.len() as i64, number_format),
        format_number(sheets as i64, number_format)
    )
}

pub(crate) fn output_inspection_json(scans: &[SourceScan]) -> String {
    serde_json::to_string_pretty(scans).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
