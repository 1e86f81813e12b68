//! Report file placement and saving

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::{info, warn};

use crate::consts::{REPORT_EXTENSION, RESULT_PREFIX};
use crate::core::{DailyTotals, ReportSummary};
use crate::error::CollectError;
use crate::report::{ReportOptions, build_report};

/// `result_<stamp>.xlsx` inside `output_dir`, or next to `first_input`.
/// The stamp is bumped until the name is free.
pub(crate) fn report_path(
    first_input: &Path,
    output_dir: Option<&Path>,
    stamp: i64,
) -> Result<PathBuf, CollectError> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => first_input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    let dir = match fs::canonicalize(&dir) {
        Ok(resolved) if resolved.is_dir() => resolved,
        _ => return Err(CollectError::OutputDir { path: dir }),
    };

    let mut stamp = stamp;
    loop {
        let path = dir.join(format!("{RESULT_PREFIX}{stamp}.{REPORT_EXTENSION}"));
        if !path.exists() {
            return Ok(path);
        }
        stamp += 1;
    }
}

/// Save the workbook, removing whatever was written if saving fails
pub(crate) fn save_report(workbook: &mut Workbook, path: &Path) -> Result<(), CollectError> {
    let bytes = workbook
        .save_to_buffer()
        .map_err(|source| write_error(path, source))?;
    write_file(path, &bytes, |file| file)
}

fn write_error(path: &Path, source: XlsxError) -> CollectError {
    CollectError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Create `path` and write `bytes` through `wrap(file)`. A failed write
/// removes the file again.
fn write_file<W: Write>(
    path: &Path,
    bytes: &[u8],
    wrap: impl FnOnce(File) -> W,
) -> Result<(), CollectError> {
    let file = File::create(path).map_err(|e| write_error(path, XlsxError::IoError(e)))?;
    let mut writer = wrap(file);
    if let Err(e) = writer.write_all(bytes).and_then(|()| writer.flush()) {
        drop(writer);
        if let Err(remove) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove, "failed to remove partial report");
        }
        return Err(write_error(path, XlsxError::IoError(e)));
    }
    Ok(())
}

/// Build and save the report for `totals`
pub(crate) fn write_report(
    totals: &DailyTotals,
    options: &ReportOptions,
    first_input: &Path,
) -> Result<(PathBuf, ReportSummary), CollectError> {
    let path = report_path(
        first_input,
        options.output_dir.as_deref(),
        Utc::now().timestamp_millis(),
    )?;
    let (mut workbook, summary) =
        build_report(totals, options).map_err(|source| write_error(&path, source))?;
    save_report(&mut workbook, &path)?;
    info!(path = %path.display(), months = summary.months.len(), "report written");
    Ok((path, summary))
}
