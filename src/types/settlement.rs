//! Settlement result types
//!
//! The settlement matrix is square over the people of a group, indexed in
//! registration order. Entry `[a][b] > 0` means `a` receives that amount from
//! `b`; entry `[a][b] < 0` means `a` pays that amount to `b`. The matrix is
//! antisymmetric and has no self entries.

use rust_decimal::Decimal;

/// A single direct payment between two people
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    /// Debtor making the payment
    pub from: String,
    /// Creditor receiving the payment
    pub to: String,
    pub amount: Decimal,
}

/// Pairwise transfers that settle every balance in a group
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementMatrix {
    people: Vec<String>,
    entries: Vec<Vec<Decimal>>,
    residual: Decimal,
}

impl SettlementMatrix {
    /// Create an all-zero matrix over `people`
    pub fn new(people: Vec<String>) -> Self {
        let size = people.len();
        SettlementMatrix {
            people,
            entries: vec![vec![Decimal::ZERO; size]; size],
            residual: Decimal::ZERO,
        }
    }

    /// Record that `debtor` pays `amount` to `creditor`
    ///
    /// Indexes are registration positions. Keeps the matrix antisymmetric.
    pub(crate) fn record(&mut self, creditor: usize, debtor: usize, amount: Decimal) {
        self.entries[creditor][debtor] += amount;
        self.entries[debtor][creditor] -= amount;
    }

    pub(crate) fn set_residual(&mut self, residual: Decimal) {
        self.residual = residual;
    }

    /// People covered by the matrix, in registration order
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Whether the matrix covers no people at all
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|person| person == name)
    }

    /// Signed amount `person` receives from `other`
    ///
    /// Returns `None` for unknown names and for self entries.
    pub fn get(&self, person: &str, other: &str) -> Option<Decimal> {
        let row = self.position(person)?;
        let column = self.position(other)?;
        (row != column).then(|| self.entries[row][column])
    }

    /// Every other person paired with the signed amount `person` receives from them
    pub fn row(&self, person: &str) -> Option<Vec<(&str, Decimal)>> {
        let row = self.position(person)?;
        Some(
            self.people
                .iter()
                .enumerate()
                .filter(|(column, _)| *column != row)
                .map(|(column, other)| (other.as_str(), self.entries[row][column]))
                .collect(),
        )
    }

    /// Positive payments only, ordered by creditor then debtor registration order
    pub fn transfers(&self) -> Vec<Transfer> {
        let mut transfers = Vec::new();
        for (creditor, to) in self.people.iter().enumerate() {
            for (debtor, from) in self.people.iter().enumerate() {
                let amount = self.entries[creditor][debtor];
                if creditor != debtor && amount > Decimal::ZERO {
                    transfers.push(Transfer {
                        from: from.clone(),
                        to: to.clone(),
                        amount,
                    });
                }
            }
        }
        transfers
    }

    /// True when no one pays anyone
    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().flatten().all(Decimal::is_zero)
    }

    /// Truncation residual written off during settlement
    ///
    /// Positive when credit was left over with no debtor to pay it, negative
    /// when debt was left over with no creditor to receive it.
    pub fn residual(&self) -> Decimal {
        self.residual
    }
}
