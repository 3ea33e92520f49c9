//! Settle Up CLI
//!
//! Command-line interface for settling group expenses from a CSV command script.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- trip.csv > transfers.csv
//! cargo run -- --format matrix trip.csv > matrix.csv
//! cargo run -- --format balances --log-level debug trip.csv
//! ```
//!
//! The program registers the people and applies the expenses listed in the
//! script, settles the group, and writes the result to stdout. Logs go to
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, unbalanced ledger, etc.)

use settle_up::{cli, logging, pipeline};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_level);

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process(&args.input_file, args.format, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
