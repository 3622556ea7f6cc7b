//! Command-line interface definitions.

mod args;

pub use args::{CheckArgs, Cli, Commands, ShowArgs};
