use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No {label} label given. Pass {flag} or set it in the config file.")]
    MissingLabel {
        label: &'static str,
        flag: &'static str,
    },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Invalid file pattern \"{input}\": {source}")]
    Pattern {
        input: String,
        source: glob::PatternError,
    },

    #[error("No files match \"{pattern}\"")]
    NoMatches { pattern: String },

    #[error("Unsupported input \"{}\" (expected xlsx, xlsm, xlsb, xls, ods or zip)", path.display())]
    UnsupportedInput { path: PathBuf },

    #[error("No input files given")]
    NoInputs,
}

/// Failures that end a collection run. The display text is what the user sees.
#[derive(Debug, Error)]
pub(crate) enum CollectError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read archive {name}: {source}")]
    Archive {
        name: String,
        source: zip::result::ZipError,
    },

    #[error("Failed to read workbook {name}: {source}")]
    Workbook {
        name: String,
        source: calamine::Error,
    },

    #[error("Unsupported input {name}")]
    Unsupported { name: String },

    #[error("No input files given")]
    NoInputs,

    #[error("No usable data found in {scope}. Check the date and sum column labels.")]
    NoData { scope: String },

    #[error("Output directory {} does not exist", path.display())]
    OutputDir { path: PathBuf },

    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
}
