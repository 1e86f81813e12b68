//! Input loading
//!
//! Routes a path by extension and exposes plain files and archive entries as
//! the same lazy sequence of `InputSource`s.

use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::CollectError;
use crate::source::{ArchiveEntries, InputKind, InputSource};

/// Sources behind one input path
pub(crate) enum Sources {
    Single(Option<InputSource>),
    Archive(ArchiveEntries<File>),
}

impl Iterator for Sources {
    type Item = Result<InputSource, CollectError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Sources::Single(source) => source.take().map(Ok),
            Sources::Archive(entries) => entries.next(),
        }
    }
}

/// Open one input path. Spreadsheets are read whole; archives are opened and
/// their entries read on demand.
pub(crate) fn load_sources(path: &Path) -> Result<Sources, CollectError> {
    match InputKind::detect(path) {
        InputKind::Spreadsheet => {
            let bytes = std::fs::read(path).map_err(|source| CollectError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), bytes = bytes.len(), "read spreadsheet");
            Ok(Sources::Single(Some(InputSource {
                name: path.display().to_string(),
                bytes,
            })))
        }
        InputKind::Archive => {
            debug!(path = %path.display(), "opening archive");
            Ok(Sources::Archive(ArchiveEntries::open(path)?))
        }
        InputKind::Unsupported => Err(CollectError::Unsupported {
            name: path.display().to_string(),
        }),
    }
}
