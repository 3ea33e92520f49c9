//! Core business logic module
//!
//! This module contains the bookkeeping and settlement components:
//! - `ledger` - People, balances and expense application
//! - `settlement` - Greedy debt settlement over a ledger

pub mod ledger;
pub mod settlement;

pub use ledger::Ledger;
pub use settlement::SettlementEngine;
