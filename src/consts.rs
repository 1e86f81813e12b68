/// Extensions accepted as spreadsheets, both on disk and inside archives
pub(crate) const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Extension of archives whose spreadsheet entries are expanded
pub(crate) const ARCHIVE_EXTENSION: &str = "zip";

/// Text dates in data rows: "05.03.2024"
pub(crate) const DOTTED_DATE_FORMAT: &str = "%d.%m.%Y";

/// Month key used as the report sheet name: "03.2024"
pub(crate) const MONTH_KEY_FORMAT: &str = "%m.%Y";

/// Report file name prefix, followed by a run timestamp
pub(crate) const RESULT_PREFIX: &str = "result_";

/// Report file extension
pub(crate) const REPORT_EXTENSION: &str = "xlsx";

pub(crate) const DEFAULT_DAY_TITLE: &str = "Day";
pub(crate) const DEFAULT_SUM_TITLE: &str = "Sum";
pub(crate) const DEFAULT_TOTAL_TITLE: &str = "Total:";
