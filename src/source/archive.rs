//! Zip archive expansion
//!
//! Yields the spreadsheet entries of an archive lazily, in archive order.
//! Directories and entries with other extensions are passed over.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::trace;
use zip::ZipArchive;

use crate::error::CollectError;
use crate::source::{InputKind, InputSource};

pub(crate) struct ArchiveEntries<R: Read + Seek> {
    name: String,
    archive: ZipArchive<R>,
    next_index: usize,
}

impl ArchiveEntries<File> {
    pub(crate) fn open(path: &Path) -> Result<Self, CollectError> {
        let file = File::open(path).map_err(|source| CollectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file, path.display().to_string())
    }
}

impl<R: Read + Seek> ArchiveEntries<R> {
    pub(crate) fn new(reader: R, name: String) -> Result<Self, CollectError> {
        let archive = ZipArchive::new(reader).map_err(|source| CollectError::Archive {
            name: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            archive,
            next_index: 0,
        })
    }

    fn entry_name(&self, entry: &str) -> String {
        Path::new(&self.name).join(entry).display().to_string()
    }
}

impl<R: Read + Seek> Iterator for ArchiveEntries<R> {
    type Item = Result<InputSource, CollectError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < self.archive.len() {
            let index = self.next_index;
            self.next_index += 1;

            let mut entry = match self.archive.by_index(index) {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(CollectError::Archive {
                        name: self.name.clone(),
                        source,
                    }));
                }
            };
            if entry.is_dir() || InputKind::detect(entry.name()) != InputKind::Spreadsheet {
                trace!(archive = %self.name, entry = entry.name(), "skipping archive entry");
                continue;
            }

            let entry_name = entry.name().to_string();
            // The declared size comes from the archive and is not trusted
            let mut bytes = Vec::new();
            let read = entry.read_to_end(&mut bytes);
            drop(entry);

            let name = self.entry_name(&entry_name);
            return Some(match read {
                Ok(_) => Ok(InputSource { name, bytes }),
                Err(source) => Err(CollectError::Archive {
                    name,
                    source: source.into(),
                }),
            });
        }
        None
    }
}
