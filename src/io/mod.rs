//! I/O module
//!
//! Handles command script parsing and settlement output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `script_reader` - Command script reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{
    convert_csv_record, write_balances_csv, write_matrix_csv, write_transfers_csv, CsvRecord,
    LedgerCommand,
};
pub use script_reader::ScriptReader;
