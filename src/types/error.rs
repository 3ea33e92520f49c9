//! Error types for the settlement ledger
//!
//! Every failure is reported synchronously by the call that caused it, and a
//! failed call never leaves a partial change behind in the ledger.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Malformed names, costs or splits, duplicate people
//! - **Lookup Errors**: References to people that were never registered
//! - **I/O Errors**: Reading the command script or writing results (CLI only)

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Which side of an expense a split or person list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// People who incurred the cost and are debited
    Payee,
    /// People who fronted the money and are credited
    Payer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Payee => write!(f, "payee"),
            Role::Payer => write!(f, "payer"),
        }
    }
}

/// Coarse classification of a [`LedgerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was malformed
    Validation,
    /// A referenced person is not registered
    Lookup,
    /// Reading or writing outside the ledger failed
    Io,
}

/// Main error type for the ledger and settlement engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Person names must contain at least one non-whitespace character
    #[error("Invalid person name '{name}'")]
    InvalidName { name: String },

    /// A person with this name is already registered in the group
    #[error("Person '{name}' is already registered")]
    DuplicatePerson { name: String },

    /// Referenced person is not part of the group
    #[error("Person '{name}' is not registered")]
    UnknownPerson { name: String },

    /// Expense cost must be strictly positive
    #[error("Invalid cost {cost}: cost must be positive")]
    InvalidCost { cost: Decimal },

    /// An expense needs at least one payee and one payer
    #[error("Expense has no {role}s")]
    EmptyParticipants { role: Role },

    /// A split must carry exactly one share per person
    #[error("Incorrectly formatted {role} split: expected {expected} shares, got {actual}")]
    SplitLengthMismatch {
        role: Role,
        expected: usize,
        actual: usize,
    },

    /// The shares of a split must add up to exactly 100
    #[error("Incorrectly formatted {role} split: shares sum to {sum}, expected 100")]
    SplitSumMismatch { role: Role, sum: Decimal },

    /// Every share of a split must be strictly positive
    #[error("Incorrectly formatted {role} split: share {share} is not positive")]
    NonPositiveShare { role: Role, share: Decimal },

    /// Balance arithmetic would leave the representable range
    #[error("Arithmetic overflow in {operation} for '{name}'")]
    ArithmeticOverflow { operation: String, name: String },

    /// Net balances drifted from the recorded truncation residual
    #[error("Ledger is unbalanced: balances sum to {actual}, expected {expected}")]
    Unbalanced { expected: Decimal, actual: Decimal },

    /// I/O error while reading the script or writing output
    #[error("I/O error: {message}")]
    IoError { message: String },

    /// Malformed command script record
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError { line: Option<u64>, message: String },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return LedgerError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Classify this error as validation, lookup or I/O
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::UnknownPerson { .. } => ErrorKind::Lookup,
            LedgerError::IoError { .. } | LedgerError::ParseError { .. } => ErrorKind::Io,
            _ => ErrorKind::Validation,
        }
    }

    pub fn invalid_name(name: &str) -> Self {
        LedgerError::InvalidName {
            name: name.to_string(),
        }
    }

    pub fn duplicate_person(name: &str) -> Self {
        LedgerError::DuplicatePerson {
            name: name.to_string(),
        }
    }

    pub fn unknown_person(name: &str) -> Self {
        LedgerError::UnknownPerson {
            name: name.to_string(),
        }
    }

    pub fn arithmetic_overflow(operation: &str, name: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            name: name.to_string(),
        }
    }
}
