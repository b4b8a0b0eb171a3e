//! Command-line interface module.

mod args;
pub mod rewrite;

pub use args::Cli;
