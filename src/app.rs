use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::collector::{Collector, CollectorSettings, EmptyCheck};
use crate::core::RunOutcome;
use crate::error::AppError;
use crate::output::{
    NumberFormat, TableOptions, output_inspection_json, output_outcome_json,
    print_inspection_table, print_outcome, print_summary_table,
};
use crate::report::ReportOptions;
use crate::source::InputKind;

/// Run the parsed command. Configuration errors exit with failure before any input is read.
pub(crate) fn run(cli: &Cli) -> ExitCode {
    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                println!("{}", output_outcome_json(&RunOutcome::failure(e.to_string())));
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<ExitCode, AppError> {
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    let labels = cli.labels()?;
    let table_options = TableOptions {
        use_color: cli.use_color(),
        number_format,
    };

    match &cli.command {
        Commands::Collect(args) => {
            let inputs = expand_inputs(&args.inputs)?;
            let settings = CollectorSettings {
                labels,
                report: args.report_options(),
                empty_check: args.empty_check(),
            };
            let mut collector = Collector::new(settings);
            let outcome = collector.run(&inputs);
            debug!(state = ?collector.state(), "collector finished");
            if cli.json {
                println!("{}", output_outcome_json(&outcome));
            } else {
                print_outcome(&outcome);
                if let RunOutcome::Success { summary, .. } = &outcome
                    && args.summary
                {
                    print_summary_table(summary, table_options);
                }
            }
            Ok(exit_code(&outcome))
        }
        Commands::Inspect(args) => {
            let inputs = expand_inputs(&args.inputs)?;
            let settings = CollectorSettings {
                labels,
                report: ReportOptions::default(),
                empty_check: EmptyCheck::Run,
            };
            match Collector::new(settings).inspect(&inputs) {
                Ok(scans) if cli.json => println!("{}", output_inspection_json(&scans)),
                Ok(scans) => print_inspection_table(&scans, table_options),
                Err(e) => {
                    let outcome = RunOutcome::failure(e.to_string());
                    if cli.json {
                        println!("{}", output_outcome_json(&outcome));
                    } else {
                        print_outcome(&outcome);
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(outcome: &RunOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn is_glob(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Expand glob patterns (sorted, directories dropped) and reject unsupported inputs.
/// Plain paths are kept in the order given.
pub(crate) fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut inputs = Vec::new();
    for arg in args {
        if !is_glob(arg) {
            inputs.push(PathBuf::from(arg));
            continue;
        }
        let entries = glob::glob(arg).map_err(|source| AppError::Pattern {
            input: arg.clone(),
            source,
        })?;
        let mut matches: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|p| !p.is_dir())
            .collect();
        if matches.is_empty() {
            return Err(AppError::NoMatches {
                pattern: arg.clone(),
            });
        }
        matches.sort();
        debug!(pattern = %arg, matches = matches.len(), "expanded pattern");
        inputs.extend(matches);
    }

    if let Some(path) = inputs
        .iter()
        .find(|p| InputKind::detect(p) == InputKind::Unsupported)
    {
        return Err(AppError::UnsupportedInput { path: path.clone() });
    }
    if inputs.is_empty() {
        return Err(AppError::NoInputs);
    }
    Ok(inputs)
}
