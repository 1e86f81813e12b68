pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, LogLevel};
pub(crate) use commands::Commands;
