mod format;
mod inspect;
mod outcome;

pub(crate) use format::NumberFormat;
pub(crate) use inspect::{output_inspection_json, print_inspection_table};
pub(crate) use outcome::{TableOptions, output_outcome_json, print_outcome, print_summary_table};
