//! CSV format handling for command scripts and settlement output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to ledger commands
//! - Transfer, matrix and balance output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Input Format
//!
//! ```text
//! type,name,payees,payers,cost,payee_split,payer_split
//! person,Ann,,,,,
//! person,My,,,,,
//! expense,,Ann,My,25.50,,
//! ```
//!
//! List columns are separated by `;` and may not contain empty entries. An
//! empty split column means an equal split.

use crate::types::money::format_cents;
use crate::types::{Expense, LedgerError, SettlementMatrix, Split, Transfer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Separator between names or shares inside a single CSV field
pub const LIST_SEPARATOR: char = ';';

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// type, name, payees, payers, cost, payee_split, payer_split.
/// Person rows only use `name`; expense rows use everything else.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub payees: Option<String>,
    #[serde(default)]
    pub payers: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub payee_split: Option<String>,
    #[serde(default)]
    pub payer_split: Option<String>,
}

/// A single operation read from a command script
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Register a new person
    RegisterPerson(String),
    /// Apply an expense to the ledger
    ApplyExpense(Expense),
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

/// Split a `;`-separated list, rejecting empty entries such as `A;;B`
fn parse_list<'a>(value: &'a str, column: &str) -> Result<Vec<&'a str>, String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .map(|entry| {
            if entry.is_empty() {
                Err(format!("Empty entry in {} list '{}'", column, value))
            } else {
                Ok(entry)
            }
        })
        .collect()
}

fn parse_names(field: Option<&str>, column: &str) -> Result<Vec<String>, String> {
    let Some(value) = non_empty(field) else {
        return Ok(Vec::new());
    };

    Ok(parse_list(value, column)?.into_iter().map(String::from).collect())
}

fn parse_decimal(value: &str, column: &str) -> Result<Decimal, String> {
    Decimal::from_str(value).map_err(|_| format!("Invalid {} '{}'", column, value))
}

fn parse_split(field: Option<&str>, column: &str) -> Result<Split, String> {
    let Some(value) = non_empty(field) else {
        return Ok(Split::Equal);
    };

    parse_list(value, column)?
        .into_iter()
        .map(|share| parse_decimal(share, column))
        .collect::<Result<Vec<_>, _>>()
        .map(Split::Percentages)
}

/// Convert a CsvRecord to a LedgerCommand
///
/// This function:
/// - Parses the record type (case-insensitive)
/// - Requires a name for person rows
/// - Splits the `;`-separated people and share lists of expense rows,
///   rejecting empty entries
/// - Parses the cost and shares into Decimals
///
/// Semantic checks (positive cost, shares summing to 100, registered
/// people) are left to the ledger.
///
/// # Returns
///
/// Result containing either:
/// - Ok(LedgerCommand) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<LedgerCommand, String> {
    match csv_record.record_type.trim().to_lowercase().as_str() {
        "person" => non_empty(csv_record.name.as_deref())
            .map(|name| LedgerCommand::RegisterPerson(name.to_string()))
            .ok_or_else(|| "person record requires a name".to_string()),
        "expense" => {
            let cost = non_empty(csv_record.cost.as_deref())
                .ok_or_else(|| "expense record requires a cost".to_string())
                .and_then(|cost| parse_decimal(cost, "cost"))?;

            let mut expense = Expense::new(
                parse_names(csv_record.payees.as_deref(), "payees")?,
                parse_names(csv_record.payers.as_deref(), "payers")?,
                cost,
            );
            expense.payee_split = parse_split(csv_record.payee_split.as_deref(), "payee share")?;
            expense.payer_split = parse_split(csv_record.payer_split.as_deref(), "payer share")?;

            Ok(LedgerCommand::ApplyExpense(expense))
        }
        other => Err(format!("Invalid record type: '{}'", other)),
    }
}

/// Write transfers in CSV format
///
/// Writes one row per payment with columns: from, to, amount
pub fn write_transfers_csv(transfers: &[Transfer], output: &mut dyn Write) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["from", "to", "amount"])?;

    for transfer in transfers {
        writer.write_record([
            transfer.from.as_str(),
            transfer.to.as_str(),
            format_cents(transfer.amount).as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write the full settlement matrix in CSV format
///
/// The header is `person` followed by every name; each row holds the signed
/// amount that person receives from the column's person. Self cells are empty.
pub fn write_matrix_csv(matrix: &SettlementMatrix, output: &mut dyn Write) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    let header: Vec<&str> = std::iter::once("person")
        .chain(matrix.people().iter().map(String::as_str))
        .collect();
    writer.write_record(&header)?;

    for person in matrix.people() {
        let cells = matrix.people().iter().map(|other| {
            matrix
                .get(person, other)
                .map(format_cents)
                .unwrap_or_default()
        });
        let row: Vec<String> = std::iter::once(person.clone()).chain(cells).collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}

/// Write balances in CSV format
///
/// Writes one row per person with columns: person, balance
pub fn write_balances_csv(balances: &[(&str, Decimal)], output: &mut dyn Write) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["person", "balance"])?;

    for (name, balance) in balances {
        writer.write_record([*name, format_cents(*balance).as_str()])?;
    }

    writer.flush()?;

    Ok(())
}
