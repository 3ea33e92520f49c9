//! Expense-related types
//!
//! An expense is not stored anywhere. It describes a single change to the
//! ledger: payees are debited and payers are credited, each by their share of
//! the cost truncated to cents.

use super::error::{LedgerError, Role};
use super::money::{equal_share, percent_of, FULL_SHARE};
use rust_decimal::Decimal;

/// How a cost is divided among the people on one side of an expense
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Split {
    /// Every person gets the same share
    #[default]
    Equal,

    /// One percentage per person, in the same order as the people
    ///
    /// Shares must be positive and add up to exactly 100.
    Percentages(Vec<Decimal>),
}

impl Split {
    /// Check this split against the number of people it divides the cost among
    pub fn validate(&self, count: usize, role: Role) -> Result<(), LedgerError> {
        let Split::Percentages(shares) = self else {
            return Ok(());
        };

        if shares.len() != count {
            return Err(LedgerError::SplitLengthMismatch {
                role,
                expected: count,
                actual: shares.len(),
            });
        }

        if let Some(&share) = shares.iter().find(|share| share.is_sign_negative() || share.is_zero()) {
            return Err(LedgerError::NonPositiveShare { role, share });
        }

        let sum = shares
            .iter()
            .try_fold(Decimal::ZERO, |acc, share| acc.checked_add(*share));
        match sum {
            Some(sum) if sum == FULL_SHARE => Ok(()),
            Some(sum) => Err(LedgerError::SplitSumMismatch { role, sum }),
            None => Err(LedgerError::arithmetic_overflow("split", &role.to_string())),
        }
    }

    /// Amount owed by each of `count` people, in order
    ///
    /// Every amount is truncated to cents, so the amounts may add up to less
    /// than `cost`. Assumes the split was validated for `count`.
    pub fn amounts(&self, cost: Decimal, count: usize, role: Role) -> Result<Vec<Decimal>, LedgerError> {
        let overflow = || LedgerError::arithmetic_overflow("split", &role.to_string());

        match self {
            Split::Equal => {
                let share = equal_share(cost, count).ok_or_else(overflow)?;
                Ok(vec![share; count])
            }
            Split::Percentages(shares) => shares
                .iter()
                .map(|percent| percent_of(cost, *percent).ok_or_else(overflow))
                .collect(),
        }
    }
}

/// A single shared expense to apply to a ledger
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use settle_up::Expense;
///
/// let expense = Expense::new(["Ann", "Li", "Jo"], ["My"], Decimal::from(300))
///     .with_payee_split(vec![Decimal::from(20), Decimal::from(20), Decimal::from(60)]);
/// assert_eq!(expense.payees.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// People who incurred the cost, debited
    pub payees: Vec<String>,

    /// People who fronted the money, credited
    pub payers: Vec<String>,

    /// Total cost, must be positive
    pub cost: Decimal,

    pub payee_split: Split,

    pub payer_split: Split,
}

impl Expense {
    /// Create an expense split equally on both sides
    ///
    /// A single person is passed as a one-element sequence.
    pub fn new<I, J, S, T>(payees: I, payers: J, cost: Decimal) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Expense {
            payees: payees.into_iter().map(Into::into).collect(),
            payers: payers.into_iter().map(Into::into).collect(),
            cost,
            payee_split: Split::Equal,
            payer_split: Split::Equal,
        }
    }

    /// Divide the debit among payees by percentage
    pub fn with_payee_split(mut self, shares: Vec<Decimal>) -> Self {
        self.payee_split = Split::Percentages(shares);
        self
    }

    /// Divide the credit among payers by percentage
    pub fn with_payer_split(mut self, shares: Vec<Decimal>) -> Self {
        self.payer_split = Split::Percentages(shares);
        self
    }

    /// Validate the cost and both splits
    ///
    /// Does not check that the people are registered; that is up to the ledger.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.cost.is_sign_negative() || self.cost.is_zero() {
            return Err(LedgerError::InvalidCost { cost: self.cost });
        }
        if self.payees.is_empty() {
            return Err(LedgerError::EmptyParticipants { role: Role::Payee });
        }
        if self.payers.is_empty() {
            return Err(LedgerError::EmptyParticipants { role: Role::Payer });
        }

        self.payee_split.validate(self.payees.len(), Role::Payee)?;
        self.payer_split.validate(self.payers.len(), Role::Payer)?;

        Ok(())
    }

    /// Debit owed by each payee, in payee order
    pub fn debits(&self) -> Result<Vec<Decimal>, LedgerError> {
        self.payee_split
            .amounts(self.cost, self.payees.len(), Role::Payee)
    }

    /// Credit due to each payer, in payer order
    pub fn credits(&self) -> Result<Vec<Decimal>, LedgerError> {
        self.payer_split
            .amounts(self.cost, self.payers.len(), Role::Payer)
    }
}
