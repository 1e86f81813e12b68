//! Fixture builders for unit tests: in-memory xlsx workbooks and zip archives

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A fixture cell
pub(crate) enum Fx {
    Text(&'static str),
    Num(f64),
    /// A date-formatted cell (year, month, day)
    Date(u16, u8, u8),
    Blank,
}

/// Build an xlsx workbook with one worksheet per `(name, rows)` pair
pub(crate) fn xlsx_bytes(sheets: &[(&str, Vec<Vec<Fx>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("dd.mm.yyyy");
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Fx::Text(s) => {
                        worksheet.write_string(r, c, *s).unwrap();
                    }
                    Fx::Num(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Fx::Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &date, &date_format)
                            .unwrap();
                    }
                    Fx::Blank => {}
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Build a zip archive. Names ending in '/' become directory entries.
pub(crate) fn zip_bytes(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, bytes) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(bytes).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}
