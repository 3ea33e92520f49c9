//! Command script processing pipeline
//!
//! Orchestrates a complete run by coordinating between the ScriptReader (for
//! CSV input), the Ledger and SettlementEngine (for business logic), and the
//! csv_format writers (for output).
//!
//! # Error Handling
//!
//! Fatal errors (file not found, unbalanced ledger, write failures) are
//! returned immediately. A script record that cannot be parsed or is rejected
//! by the ledger is logged and skipped; the ledger is never partially updated
//! by a rejected record.

use crate::cli::OutputFormat;
use crate::core::Ledger;
use crate::io::csv_format::{
    write_balances_csv, write_matrix_csv, write_transfers_csv, LedgerCommand,
};
use crate::io::script_reader::ScriptReader;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Process a command script file and write the result to output
///
/// # Examples
///
/// ```no_run
/// use settle_up::cli::OutputFormat;
/// use settle_up::pipeline;
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// pipeline::process(Path::new("trip.csv"), OutputFormat::Transfers, &mut output)
///     .expect("Processing failed");
/// ```
pub fn process(
    input_path: &Path,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let reader = ScriptReader::new(input_path)?;
    process_commands(reader, format, output)
}

/// Apply a stream of commands to a fresh ledger, settle it and write the result
pub fn process_commands<I>(
    commands: I,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = Result<LedgerCommand, LedgerError>>,
{
    let mut ledger = Ledger::new();
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for result in commands {
        let outcome = result.and_then(|command| apply_command(&mut ledger, command));
        match outcome {
            Ok(()) => applied += 1,
            Err(e) => {
                skipped += 1;
                warn!(kind = ?e.kind(), "Skipping script record: {}", e);
            }
        }
    }
    info!(applied, skipped, people = ledger.people_count(), "processed script");

    // Balances are captured before settlement zeroes them
    let names: Vec<String> = ledger.list_people().into_iter().map(String::from).collect();
    let balances = ledger.query_balances(&names)?;
    let matrix = ledger.settle()?;

    match format {
        OutputFormat::Transfers => write_transfers_csv(&matrix.transfers(), output),
        OutputFormat::Matrix => write_matrix_csv(&matrix, output),
        OutputFormat::Balances => {
            let rows: Vec<(&str, _)> = names.iter().map(String::as_str).zip(balances).collect();
            write_balances_csv(&rows, output)
        }
    }
}

fn apply_command(ledger: &mut Ledger, command: LedgerCommand) -> Result<(), LedgerError> {
    match command {
        LedgerCommand::RegisterPerson(name) => ledger.register_person(&name),
        LedgerCommand::ApplyExpense(expense) => ledger.apply_expense(&expense),
    }
}
