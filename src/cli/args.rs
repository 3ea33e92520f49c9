use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Settle shared group expenses with direct pairwise transfers
#[derive(Parser, Debug)]
#[command(name = "settle-up")]
#[command(about = "Settle shared group expenses with direct pairwise transfers", long_about = None)]
pub struct CliArgs {
    /// Input CSV command script registering people and expenses
    #[arg(value_name = "INPUT", help = "Path to the input CSV command script")]
    pub input_file: PathBuf,

    /// What to write to stdout
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "transfers",
        help = "Output: 'transfers' list, full 'matrix', or 'balances' before settling"
    )]
    pub format: OutputFormat,

    /// Log verbosity used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for stderr (error, warn, info, debug, trace)"
    )]
    pub log_level: Level,
}

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per payment: from, to, amount
    Transfers,
    /// Signed amount every person receives from every other person
    Matrix,
    /// Balances before settlement
    Balances,
}
