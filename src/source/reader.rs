//! Spreadsheet reader
//!
//! Opens an `InputSource` with calamine (format sniffed from the bytes) and
//! yields its worksheets one at a time as rows of typed cells.

use calamine::{Data, Reader, SheetType, Sheets, open_workbook_auto_from_rs};
use std::io::Cursor;
use tracing::debug;

use crate::core::{Cell, Sheet};
use crate::error::CollectError;
use crate::source::InputSource;
use crate::utils::parse_iso_datetime;

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::DateTime(dt) if !dt.is_duration() => {
                dt.as_datetime().map_or(Cell::Absent, Cell::Date)
            }
            Data::DateTimeIso(s) => parse_iso_datetime(s).map_or(Cell::Absent, Cell::Date),
            _ => Cell::Absent,
        }
    }
}

pub(crate) struct SpreadsheetReader {
    name: String,
    workbook: Sheets<Cursor<Vec<u8>>>,
    sheet_names: std::vec::IntoIter<String>,
}

impl SpreadsheetReader {
    pub(crate) fn open(source: InputSource) -> Result<Self, CollectError> {
        let InputSource { name, bytes } = source;
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| {
            CollectError::Workbook {
                name: name.clone(),
                source,
            }
        })?;

        // Chart and macro sheets have no cells to scan
        let sheet_names: Vec<String> = workbook
            .sheets_metadata()
            .iter()
            .filter(|s| matches!(s.typ, SheetType::WorkSheet))
            .map(|s| s.name.clone())
            .collect();
        debug!(source = %name, sheets = sheet_names.len(), "opened workbook");

        Ok(Self {
            name,
            workbook,
            sheet_names: sheet_names.into_iter(),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Iterator for SpreadsheetReader {
    type Item = Result<Sheet, CollectError>;

    fn next(&mut self) -> Option<Self::Item> {
        let sheet_name = self.sheet_names.next()?;
        let range = match self.workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(source) => {
                return Some(Err(CollectError::Workbook {
                    name: self.name.clone(),
                    source,
                }));
            }
        };

        let (first_row, first_column) = range
            .start()
            .map_or((0, 0), |(r, c)| (r as usize, c as usize));
        let rows = range
            .rows()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();

        Some(Ok(Sheet {
            name: sheet_name,
            first_row,
            first_column,
            rows,
        }))
    }
}
