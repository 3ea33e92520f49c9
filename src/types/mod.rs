//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `person`: Group members and their balances
//! - `expense`: Expenses and percentage splits
//! - `settlement`: The settlement matrix and transfers
//! - `money`: Fixed-point truncation helpers
//! - `error`: Error types for the ledger

pub mod error;
pub mod expense;
pub mod money;
pub mod person;
pub mod settlement;

pub use error::{ErrorKind, LedgerError, Role};
pub use expense::{Expense, Split};
pub use person::Person;
pub use settlement::{SettlementMatrix, Transfer};
