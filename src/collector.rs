//! Collection run
//!
//! Drives one run over an ordered list of inputs:
//! `Idle → Reading { index, total } → Writing → Done`. Every input is read
//! into a single `DailyTotals`; any read error aborts the run and no report
//! is written.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::{DailyTotals, HeaderLabels, ReportSummary, RunOutcome, SourceScan, scan_source};
use crate::error::CollectError;
use crate::report::{ReportOptions, write_report};
use crate::source::{SpreadsheetReader, load_sources};

/// Granularity of the "no usable data" check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EmptyCheck {
    /// Fail only when the whole run produced nothing (default)
    #[default]
    Run,
    /// Fail as soon as one spreadsheet source produced nothing
    Source,
}

#[derive(Debug, Clone)]
pub(crate) struct CollectorSettings {
    pub(crate) labels: HeaderLabels,
    pub(crate) report: ReportOptions,
    pub(crate) empty_check: EmptyCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CollectorState {
    Idle,
    Reading { index: usize, total: usize },
    Writing,
    Done,
}

pub(crate) struct Collector {
    settings: CollectorSettings,
    state: CollectorState,
}

impl Collector {
    pub(crate) fn new(settings: CollectorSettings) -> Self {
        Collector {
            settings,
            state: CollectorState::Idle,
        }
    }

    pub(crate) fn state(&self) -> CollectorState {
        self.state
    }

    fn transition(&mut self, next: CollectorState) {
        debug!(from = ?self.state, to = ?next, "collector state");
        self.state = next;
    }

    /// Run the whole collection. Always ends in `Done` with exactly one outcome.
    pub(crate) fn run(&mut self, inputs: &[PathBuf]) -> RunOutcome {
        let result = self.collect(inputs);
        self.transition(CollectorState::Done);
        match result {
            Ok((path, summary)) => {
                info!(path = %path.display(), "run succeeded");
                RunOutcome::success(path, summary)
            }
            Err(e) => {
                info!(error = %e, "run failed");
                RunOutcome::failure(e.to_string())
            }
        }
    }

    fn collect(&mut self, inputs: &[PathBuf]) -> Result<(PathBuf, ReportSummary), CollectError> {
        let first = inputs.first().ok_or(CollectError::NoInputs)?;
        let mut totals = DailyTotals::default();
        let mut scans = Vec::new();

        for (index, path) in inputs.iter().enumerate() {
            self.transition(CollectorState::Reading {
                index,
                total: inputs.len(),
            });
            for scan in read_input(path, &self.settings.labels, &mut totals)? {
                if self.settings.empty_check == EmptyCheck::Source
                    && scan.stats().parsed_rows == 0
                {
                    return Err(CollectError::NoData { scope: scan.source });
                }
                scans.push(scan);
            }
        }

        if totals.is_empty() {
            return Err(CollectError::NoData {
                scope: empty_scope(first, &scans),
            });
        }
        debug!(days = totals.len(), sources = scans.len(), "reading finished");

        self.transition(CollectorState::Writing);
        write_report(&totals, &self.settings.report, first)
    }

    /// Read every input and report what was found, without writing anything
    pub(crate) fn inspect(&self, inputs: &[PathBuf]) -> Result<Vec<SourceScan>, CollectError> {
        if inputs.is_empty() {
            return Err(CollectError::NoInputs);
        }
        let mut totals = DailyTotals::default();
        let mut scans = Vec::new();
        for path in inputs {
            scans.extend(read_input(path, &self.settings.labels, &mut totals)?);
        }
        Ok(scans)
    }
}

/// Scan every spreadsheet behind one input path
fn read_input(
    path: &Path,
    labels: &HeaderLabels,
    totals: &mut DailyTotals,
) -> Result<Vec<SourceScan>, CollectError> {
    let mut scans = Vec::new();
    for source in load_sources(path)? {
        let reader = SpreadsheetReader::open(source?)?;
        let scan = scan_source(reader, labels, totals)?;
        debug!(
            source = %scan.source,
            sheets = scan.sheets.len(),
            parsed = scan.stats().parsed_rows,
            "read source"
        );
        scans.push(scan);
    }
    Ok(scans)
}

/// Name the single source read, or count them
fn empty_scope(first: &Path, scans: &[SourceScan]) -> String {
    match scans {
        [] => first.display().to_string(),
        [only] => only.source.clone(),
        _ => format!("{} input sources", scans.len()),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::testutil::{Fx, xlsx_bytes, zip_bytes};
    use calamine::{Data, Reader, open_workbook_auto};
    use std::fs;
    use tempfile::TempDir;

    fn settings() -> CollectorSettings {
        CollectorSettings {
            labels: HeaderLabels::new("Date", "Sum"),
            report: ReportOptions::default(),
            empty_check: EmptyCheck::Run,
        }
    }

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    fn ledger(rows: Vec<Vec<Fx>>) -> Vec<u8> {
        let mut all = vec![vec![Fx::Text("Date"), Fx::Text("Sum")]];
        all.extend(rows);
        xlsx_bytes(&[("Sheet1", all)])
    }

    fn output_path(outcome: &RunOutcome) -> PathBuf {
        match outcome {
            RunOutcome::Success { output_path, .. } => output_path.clone(),
            RunOutcome::Failure { message } => panic!("run failed: {message}"),
        }
    }

    fn number(value: Option<&Data>) -> f64 {
        match value {
            Some(Data::Float(f)) => *f,
            Some(Data::Int(i)) => *i as f64,
            other => panic!("expected a number, got {other:?}"),
        }
    }

    fn report_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("result_"))
            })
            .collect()
    }

    #[test]
    fn merges_amounts_across_files_and_sheets() {
        let dir = TempDir::new().unwrap();
        let a = write(
            &dir,
            "a.xlsx",
            &ledger(vec![
                vec![Fx::Text("05.03.2024"), Fx::Num(120.5)],
                vec![Fx::Text("2024-03-05"), Fx::Num(999.0)],
            ]),
        );
        let b = write(
            &dir,
            "b.xlsx",
            &xlsx_bytes(&[
                (
                    "One",
                    vec![
                        vec![Fx::Text("DATE"), Fx::Text("SUM")],
                        vec![Fx::Date(2024, 3, 5), Fx::Num(30.0)],
                    ],
                ),
                (
                    "Two",
                    vec![
                        vec![Fx::Blank, Fx::Text("sum"), Fx::Text("date")],
                        vec![Fx::Blank, Fx::Num(4.0), Fx::Text("06.03.2024")],
                    ],
                ),
            ]),
        );

        let mut collector = Collector::new(settings());
        let outcome = collector.run(&[a, b]);
        assert_eq!(collector.state(), CollectorState::Done);
        assert!(outcome.is_success(), "{}", outcome.message());

        let path = output_path(&outcome);
        assert!(path.is_absolute());
        assert_eq!(
            outcome.message(),
            format!("Report '{}' is successfully created!", path.display())
        );

        let mut book = open_workbook_auto(&path).unwrap();
        let march = book.worksheet_range("03.2024").unwrap();
        assert_eq!(number(march.get_value((2, 1))), 5.0);
        assert_eq!(number(march.get_value((2, 2))), 150.5);
        assert_eq!(number(march.get_value((3, 1))), 6.0);
        assert_eq!(number(march.get_value((3, 2))), 4.0);
    }

    #[test]
    fn rerun_produces_same_totals() {
        let dir = TempDir::new().unwrap();
        let a = write(
            &dir,
            "a.xlsx",
            &ledger(vec![
                vec![Fx::Text("01.02.2024"), Fx::Num(1.5)],
                vec![Fx::Text("01.03.2024"), Fx::Num(2.5)],
            ]),
        );
        let first = Collector::new(settings()).run(std::slice::from_ref(&a));
        let second = Collector::new(settings()).run(&[a]);
        assert!(first.is_success() && second.is_success());
        assert_ne!(output_path(&first), output_path(&second));

        let (
            RunOutcome::Success { summary: s1, .. },
            RunOutcome::Success { summary: s2, .. },
        ) = (first, second)
        else {
            unreachable!()
        };
        assert_eq!(s1, s2);
    }

    #[test]
    fn no_usable_rows_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let a = write(
            &dir,
            "empty.xlsx",
            &xlsx_bytes(&[(
                "Sheet1",
                vec![
                    vec![Fx::Text("Dates"), Fx::Text("Sum")],
                    vec![Fx::Text("05.03.2024"), Fx::Num(1.0)],
                ],
            )]),
        );
        let outcome = Collector::new(settings()).run(std::slice::from_ref(&a));
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message(),
            format!(
                "No usable data found in {}. Check the date and sum column labels.",
                a.display()
            )
        );
        assert!(report_files(dir.path()).is_empty());
    }

    #[test]
    fn run_check_counts_sources_when_several_are_empty() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xlsx", &ledger(vec![]));
        let b = write(&dir, "b.xlsx", &ledger(vec![]));
        let outcome = Collector::new(settings()).run(&[a, b]);
        assert_eq!(
            outcome.message(),
            "No usable data found in 2 input sources. Check the date and sum column labels."
        );
    }

    #[test]
    fn run_check_tolerates_one_empty_source() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xlsx", &ledger(vec![]));
        let b = write(
            &dir,
            "b.xlsx",
            &ledger(vec![vec![Fx::Text("05.03.2024"), Fx::Num(1.0)]]),
        );
        let outcome = Collector::new(settings()).run(&[a, b]);
        assert!(outcome.is_success(), "{}", outcome.message());
    }

    #[test]
    fn source_check_fails_on_first_empty_source() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.xlsx", &ledger(vec![]));
        let b = write(
            &dir,
            "b.xlsx",
            &ledger(vec![vec![Fx::Text("05.03.2024"), Fx::Num(1.0)]]),
        );
        let mut strict = settings();
        strict.empty_check = EmptyCheck::Source;
        let outcome = Collector::new(strict).run(&[a.clone(), b]);
        assert!(!outcome.is_success());
        assert!(outcome.message().contains(&a.display().to_string()));
        assert!(report_files(dir.path()).is_empty());
    }

    #[test]
    fn two_months_get_separate_sheets_and_subtotals() {
        let dir = TempDir::new().unwrap();
        let a = write(
            &dir,
            "a.xlsx",
            &ledger(vec![
                vec![Fx::Text("28.02.2024"), Fx::Num(10.0)],
                vec![Fx::Text("29.02.2024"), Fx::Num(20.0)],
                vec![Fx::Text("01.03.2024"), Fx::Num(5.0)],
            ]),
        );
        let outcome = Collector::new(settings()).run(&[a]);
        let path = output_path(&outcome);
        let mut book = open_workbook_auto(&path).unwrap();
        assert_eq!(book.sheet_names(), vec!["02.2024", "03.2024"]);

        let feb = book.worksheet_formula("02.2024").unwrap();
        assert_eq!(
            feb.get_value((4, 2)).unwrap().trim_start_matches('='),
            "SUM(C3:C4)"
        );
        let mar = book.worksheet_formula("03.2024").unwrap();
        assert_eq!(
            mar.get_value((3, 2)).unwrap().trim_start_matches('='),
            "SUM(C3:C3)"
        );
    }

    #[test]
    fn archive_reads_only_spreadsheet_entries() {
        let dir = TempDir::new().unwrap();
        let archive = zip_bytes(&[
            ("reports/", Vec::new()),
            (
                "reports/march.xlsx",
                ledger(vec![vec![Fx::Text("05.03.2024"), Fx::Num(7.0)]]),
            ),
            ("reports/readme.txt", b"Date Sum 05.03.2024 100".to_vec()),
        ]);
        let zip = write(&dir, "batch.zip", &archive);

        let collector = Collector::new(settings());
        let scans = collector.inspect(std::slice::from_ref(&zip)).unwrap();
        assert_eq!(scans.len(), 1);
        assert!(scans[0].source.ends_with("march.xlsx"));

        let outcome = Collector::new(settings()).run(&[zip]);
        let path = output_path(&outcome);
        assert_eq!(path.parent().unwrap(), fs::canonicalize(dir.path()).unwrap());
        let RunOutcome::Success { summary, .. } = outcome else {
            unreachable!()
        };
        assert_eq!(summary.total, 7.0);
    }

    #[test]
    fn read_error_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let good = write(
            &dir,
            "good.xlsx",
            &ledger(vec![vec![Fx::Text("05.03.2024"), Fx::Num(1.0)]]),
        );
        let missing = dir.path().join("missing.xlsx");
        let outcome = Collector::new(settings()).run(&[good, missing.clone()]);
        assert!(!outcome.is_success());
        assert!(outcome.message().contains(&missing.display().to_string()));
        assert!(report_files(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_workbook_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.xlsx", b"not a workbook");
        let outcome = Collector::new(settings()).run(&[bad]);
        assert!(!outcome.is_success());
        assert!(outcome.message().contains("bad.xlsx"));
    }

    #[test]
    fn no_inputs_is_a_failure() {
        let outcome = Collector::new(settings()).run(&[]);
        assert_eq!(outcome, RunOutcome::failure("No input files given"));
    }

    #[test]
    fn output_dir_setting_is_used() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let a = write(
            &dir,
            "a.xlsx",
            &ledger(vec![vec![Fx::Text("05.03.2024"), Fx::Num(1.0)]]),
        );
        let mut s = settings();
        s.report.output_dir = Some(out.path().to_path_buf());
        let path = output_path(&Collector::new(s).run(&[a]));
        assert_eq!(path.parent().unwrap(), fs::canonicalize(out.path()).unwrap());
        assert!(report_files(dir.path()).is_empty());
    }

    #[test]
    fn inspect_reports_columns_and_counts() {
        let dir = TempDir::new().unwrap();
        let a = write(
            &dir,
            "a.xlsx",
            &ledger(vec![
                vec![Fx::Text("05.03.2024"), Fx::Num(1.0)],
                vec![Fx::Text("bad"), Fx::Num(2.0)],
            ]),
        );
        let scans = Collector::new(settings()).inspect(&[a]).unwrap();
        let sheet = &scans[0].sheets[0];
        assert_eq!(sheet.header_row, Some(0));
        assert_eq!(sheet.mapping.located(), Some((0, 1)));
        assert_eq!(sheet.stats.parsed_rows, 1);
        assert_eq!(sheet.stats.skipped_rows, 1);
        assert!(report_files(dir.path()).is_empty());
    }

    #[test]
    fn empty_check_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            empty_check: EmptyCheck,
        }
        let w: Wrapper = toml::from_str(r#"empty_check = "source""#).unwrap();
        assert_eq!(w.empty_check, EmptyCheck::Source);
    }
}
