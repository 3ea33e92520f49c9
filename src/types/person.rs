//! Person-related types
//!
//! A person is identified by a unique, case-sensitive name and carries a
//! signed running balance: positive when the group owes them money,
//! negative when they owe the group.

use rust_decimal::Decimal;

/// A member of a group and their running balance
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Unique name within the group
    pub name: String,

    /// Net balance with two-digit precision
    ///
    /// Positive for creditors, negative for debtors.
    pub balance: Decimal,
}

impl Person {
    /// Create a new person with a zero balance
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Owed money by the group
    pub fn is_creditor(&self) -> bool {
        self.balance.is_sign_positive() && !self.balance.is_zero()
    }

    /// Owes money to the group
    pub fn is_debtor(&self) -> bool {
        self.balance.is_sign_negative() && !self.balance.is_zero()
    }
}
