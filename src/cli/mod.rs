//! CLI module - argument parsing and subcommands

mod args;
pub mod decode;

pub use args::{Cli, Commands};
