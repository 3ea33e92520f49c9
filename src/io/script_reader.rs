//! Command script reader with iterator interface
//!
//! Provides a streaming iterator over ledger commands from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use settle_up::io::script_reader::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("trip.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Record errors are `LedgerError::ParseError` carrying the line number

use crate::io::csv_format::{convert_csv_record, CsvRecord, LedgerCommand};
use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streaming reader over the commands of a script
#[derive(Debug)]
pub struct ScriptReader<R = File> {
    reader: csv::Reader<R>,
    line_num: u64,
}

impl ScriptReader<File> {
    /// Open a command script file
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (person rows may omit expense columns)
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Read a command script from any reader
    pub fn from_reader(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        Self {
            reader,
            line_num: 0,
        }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<LedgerCommand, LedgerError>;

    /// Get the next command from the script
    ///
    /// # Returns
    ///
    /// * `Some(Ok(LedgerCommand))` - Successfully parsed command
    /// * `Some(Err(LedgerError::ParseError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let result = deserializer.next()?;
        self.line_num += 1;

        // Header occupies line 1
        let line = self.line_num + 1;
        Some(match result {
            Ok(csv_record) => {
                convert_csv_record(csv_record).map_err(|message| LedgerError::ParseError {
                    line: Some(line),
                    message,
                })
            }
            Err(e) => Err(e.into()),
        })
    }
}
