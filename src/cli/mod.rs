// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level regardless of LOG_LEVEL
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,
}
