//! Settle Up Library
//! # Overview
//!
//! This library tracks shared-expense balances among the members of a group
//! and computes direct pairwise transfers that settle every balance.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Person, Expense, SettlementMatrix, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - People, balances and expense application
//!   - [`core::settlement`] - Greedy debt settlement
//! - [`io`] - CSV command scripts and settlement output
//! - [`cli`] - CLI arguments parsing
//! - [`pipeline`] - Script to settlement orchestration
//!
//! # Balances
//!
//! Each person holds a signed balance with two-digit precision:
//! - positive: the group owes them money (creditor)
//! - negative: they owe the group money (debtor)
//!
//! Expense shares are truncated to cents, never rounded up. The cents lost
//! this way are tracked by the ledger and written off at settlement.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use settle_up::{Expense, Ledger};
//!
//! let mut ledger = Ledger::new();
//! for name in ["Ann", "Jo", "My"] {
//!     ledger.register_person(name)?;
//! }
//! ledger.apply_expense(&Expense::new(["Ann", "Jo"], ["My"], Decimal::from(80)))?;
//!
//! let matrix = ledger.settle()?;
//! assert_eq!(matrix.get("My", "Jo"), Some(Decimal::from(40)));
//! assert_eq!(ledger.balance("My")?, Decimal::ZERO);
//! # Ok::<(), settle_up::LedgerError>(())
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use crate::core::{Ledger, SettlementEngine};
pub use io::{write_matrix_csv, write_transfers_csv};
pub use types::{
    ErrorKind, Expense, LedgerError, Person, Role, SettlementMatrix, Split, Transfer,
};
