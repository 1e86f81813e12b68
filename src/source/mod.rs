//! Input sources
//!
//! Plain spreadsheet files and zip archive entries both become `InputSource`s,
//! named byte buffers that the spreadsheet reader opens one at a time.

pub(crate) mod archive;
pub(crate) mod loader;
pub(crate) mod reader;

use std::path::Path;

use crate::consts::{ARCHIVE_EXTENSION, SPREADSHEET_EXTENSIONS};

/// A named spreadsheet byte stream, read once and then dropped
#[derive(Debug, Clone)]
pub(crate) struct InputSource {
    /// Display name for messages: the file path, or `<archive>/<entry>`
    pub(crate) name: String,
    pub(crate) bytes: Vec<u8>,
}

/// How an input is routed, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputKind {
    Spreadsheet,
    Archive,
    Unsupported,
}

impl InputKind {
    pub(crate) fn detect(name: impl AsRef<Path>) -> Self {
        let Some(ext) = name.as_ref().extension().and_then(|e| e.to_str()) else {
            return InputKind::Unsupported;
        };
        let ext = ext.to_ascii_lowercase();
        if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            InputKind::Spreadsheet
        } else if ext == ARCHIVE_EXTENSION {
            InputKind::Archive
        } else {
            InputKind::Unsupported
        }
    }
}

pub(crate) use archive::ArchiveEntries;
pub(crate) use loader::load_sources;
pub(crate) use reader::SpreadsheetReader;
