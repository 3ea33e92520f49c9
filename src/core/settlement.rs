//! Settlement engine
//!
//! Pairs debt against credit greedily to produce direct transfers that bring
//! every balance in a ledger back to zero.
//!
//! # Algorithm
//!
//! 1. Check that the balances sum to the recorded truncation residual
//! 2. Split people into creditors and debtors, both in registration order
//! 3. For each creditor, walk the debtors in order and let each debtor with
//!    outstanding debt pay as much as the creditor still has coming
//! 4. Write off whatever is left (the truncation residual) and zero it
//!
//! Creditors and debtors are never reordered by amount, so the result is a
//! valid settlement but not necessarily the one with the fewest transfers.

use crate::core::ledger::Ledger;
use crate::types::{LedgerError, SettlementMatrix};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Greedy, registration-order settlement calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementEngine;

impl SettlementEngine {
    /// Compute the settlement matrix for `ledger` and zero every balance
    ///
    /// This is a one-shot operation: calling it again right away yields an
    /// all-zero matrix. Cost is O(creditors × debtors).
    ///
    /// # Errors
    ///
    /// `Unbalanced` if the balances no longer sum to the residual the ledger
    /// recorded while applying expenses, or `ArithmeticOverflow` if that sum
    /// is out of range. The ledger is left untouched either way.
    pub fn settle(&self, ledger: &mut Ledger) -> Result<SettlementMatrix, LedgerError> {
        let expected = ledger.unallocated();
        let actual = ledger.imbalance()?;
        if expected != actual {
            return Err(LedgerError::Unbalanced { expected, actual });
        }

        let mut matrix = SettlementMatrix::new(
            ledger.list_people().into_iter().map(String::from).collect(),
        );
        let people = ledger.people_mut();

        let creditors: Vec<usize> = (0..people.len())
            .filter(|&idx| people[idx].is_creditor())
            .collect();
        let debtors: Vec<usize> = (0..people.len())
            .filter(|&idx| people[idx].is_debtor())
            .collect();

        for &creditor in &creditors {
            for &debtor in &debtors {
                if !people[creditor].is_creditor() {
                    break;
                }
                if !people[debtor].is_debtor() {
                    continue;
                }

                let credit = people[creditor].balance;
                let debt = -people[debtor].balance;
                let amount = credit.min(debt);

                debug!(
                    from = %people[debtor].name,
                    to = %people[creditor].name,
                    amount = %amount,
                    "matched transfer"
                );
                matrix.record(creditor, debtor, amount);

                if credit >= debt {
                    people[creditor].balance -= debt;
                    people[debtor].balance = Decimal::ZERO;
                } else {
                    people[debtor].balance += credit;
                    people[creditor].balance = Decimal::ZERO;
                }
            }
        }

        // Only the truncation residual can be left at this point
        let mut residual = Decimal::ZERO;
        for person in people.iter_mut() {
            if !person.balance.is_zero() {
                warn!(
                    name = %person.name,
                    balance = %person.balance,
                    "writing off truncation residual"
                );
                residual += person.balance;
                person.balance = Decimal::ZERO;
            }
        }
        matrix.set_residual(residual);
        ledger.reset_unallocated();

        info!(
            people = matrix.people().len(),
            creditors = creditors.len(),
            debtors = debtors.len(),
            residual = %residual,
            "settled ledger"
        );

        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Expense, Transfer};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ledger_with(names: &[&str]) -> Ledger {
        let mut ledger = Ledger::new();
        for name in names {
            ledger.register_person(name).unwrap();
        }
        ledger
    }

    const GROUP: [&str; 7] = ["Ann", "Li", "Mia", "Tor", "Jo", "My", "Fia"];

    fn trip_ledger() -> Ledger {
        let mut ledger = ledger_with(&GROUP);
        let expense = Expense::new(["Ann", "Li", "Mia", "Tor", "Jo"], ["My", "Fia"], Decimal::from(1000))
            .with_payee_split([10, 10, 10, 10, 60].map(Decimal::from).to_vec());
        ledger.apply_expense(&expense).unwrap();
        ledger
    }

    #[test]
    fn test_empty_ledger() {
        let mut ledger = Ledger::new();
        let matrix = SettlementEngine.settle(&mut ledger).unwrap();
        assert!(matrix.is_empty());
        assert!(matrix.transfers().is_empty());
    }

    #[test]
    fn test_trip_scenario() {
        let mut ledger = trip_ledger();
        let matrix = SettlementEngine.settle(&mut ledger).unwrap();

        assert_eq!(
            matrix.row("Ann").unwrap(),
            vec![
                ("Li", Decimal::ZERO),
                ("Mia", Decimal::ZERO),
                ("Tor", Decimal::ZERO),
                ("Jo", Decimal::ZERO),
                ("My", dec("-100.00")),
                ("Fia", Decimal::ZERO),
            ]
        );
        assert_eq!(
            matrix.row("Fia").unwrap(),
            vec![
                ("Ann", Decimal::ZERO),
                ("Li", Decimal::ZERO),
                ("Mia", Decimal::ZERO),
                ("Tor", Decimal::ZERO),
                ("Jo", dec("500.00")),
                ("My", Decimal::ZERO),
            ]
        );
        assert_eq!(
            matrix.row("Jo").unwrap(),
            vec![
                ("Ann", Decimal::ZERO),
                ("Li", Decimal::ZERO),
                ("Mia", Decimal::ZERO),
                ("Tor", Decimal::ZERO),
                ("My", dec("-100.00")),
                ("Fia", dec("-500.00")),
            ]
        );
        assert_eq!(matrix.residual(), Decimal::ZERO);
    }

    #[test]
    fn test_trip_scenario_zeroes_balances() {
        let mut ledger = trip_ledger();
        SettlementEngine.settle(&mut ledger).unwrap();

        assert_eq!(ledger.query_balances(&GROUP).unwrap(), vec![Decimal::ZERO; 7]);
        assert_eq!(ledger.unallocated(), Decimal::ZERO);
    }

    #[test]
    fn test_trip_scenario_transfers() {
        let mut ledger = trip_ledger();
        let transfers = SettlementEngine.settle(&mut ledger).unwrap().transfers();

        let expected: Vec<Transfer> = [
            ("Ann", "My", 100),
            ("Li", "My", 100),
            ("Mia", "My", 100),
            ("Tor", "My", 100),
            ("Jo", "My", 100),
            ("Jo", "Fia", 500),
        ]
        .into_iter()
        .map(|(from, to, amount)| Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount: Decimal::from(amount),
        })
        .collect();
        assert_eq!(transfers, expected);
    }

    #[test]
    fn test_second_settlement_is_all_zero() {
        let mut ledger = trip_ledger();
        SettlementEngine.settle(&mut ledger).unwrap();

        let again = SettlementEngine.settle(&mut ledger).unwrap();
        assert!(again.is_all_zero());
        assert_eq!(again.people().len(), 7);
    }

    #[test]
    fn test_all_zero_balances_change_nothing() {
        let mut ledger = ledger_with(&["Ann", "Li"]);
        let matrix = ledger.settle().unwrap();

        assert!(matrix.is_all_zero());
        assert_eq!(ledger.query_balances(&["Ann", "Li"]).unwrap(), vec![Decimal::ZERO; 2]);
    }

    #[test]
    fn test_credit_residual_is_written_off() {
        let mut ledger = ledger_with(&["A", "B", "C", "D"]);
        ledger
            .apply_expense(&Expense::new(["A", "B", "C"], ["D"], Decimal::from(100)))
            .unwrap();

        let matrix = ledger.settle().unwrap();

        assert_eq!(matrix.get("D", "A"), Some(dec("33.33")));
        assert_eq!(matrix.get("D", "B"), Some(dec("33.33")));
        assert_eq!(matrix.get("D", "C"), Some(dec("33.33")));
        assert_eq!(matrix.residual(), dec("0.01"));
        assert_eq!(ledger.imbalance().unwrap(), Decimal::ZERO);
        assert_eq!(ledger.balance("D").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_debt_residual_is_written_off() {
        let mut ledger = ledger_with(&["A", "B", "C"]);
        ledger
            .apply_expense(&Expense::new(["A"], ["B", "C"], Decimal::new(1001, 2)))
            .unwrap();

        // Each payer is credited 5.00, the payee is debited 10.01
        let matrix = ledger.settle().unwrap();

        assert_eq!(matrix.get("B", "A"), Some(dec("5.00")));
        assert_eq!(matrix.get("C", "A"), Some(dec("5.00")));
        assert_eq!(matrix.residual(), dec("-0.01"));
        assert_eq!(ledger.balance("A").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_creditor_spread_over_several_debtors() {
        let mut ledger = ledger_with(&["A", "B", "C", "D"]);
        ledger
            .apply_expense(&Expense::new(["C", "D"], ["A", "B"], Decimal::from(100)).with_payer_split(
                vec![Decimal::from(70), Decimal::from(30)],
            ))
            .unwrap();

        // A: +70, B: +30, C: -50, D: -50
        let matrix = ledger.settle().unwrap();

        assert_eq!(matrix.get("A", "C"), Some(Decimal::from(50)));
        assert_eq!(matrix.get("A", "D"), Some(Decimal::from(20)));
        assert_eq!(matrix.get("B", "D"), Some(Decimal::from(30)));
        assert_eq!(matrix.get("B", "C"), Some(Decimal::ZERO));
        assert_eq!(matrix.get("C", "D"), Some(Decimal::ZERO));
        assert_eq!(matrix.get("D", "A"), Some(Decimal::from(-20)));
    }

    #[test]
    fn test_unbalanced_ledger_is_rejected() {
        let mut ledger = ledger_with(&["Ann", "Li"]);
        ledger.people_mut()[0].balance = Decimal::from(5);

        let err = SettlementEngine.settle(&mut ledger).unwrap_err();

        assert_eq!(
            err,
            LedgerError::Unbalanced {
                expected: Decimal::ZERO,
                actual: Decimal::from(5)
            }
        );
        assert_eq!(ledger.balance("Ann").unwrap(), Decimal::from(5));
    }

    #[test]
    fn test_large_balances_settle() {
        let mut ledger = ledger_with(&["A", "B", "C", "D"]);
        let large = dec("50000000000000000000000000000");
        ledger.apply_expense(&Expense::new(["C"], ["A"], large)).unwrap();
        ledger.apply_expense(&Expense::new(["D"], ["B"], large)).unwrap();

        let matrix = ledger.settle().unwrap();

        assert_eq!(matrix.get("A", "C"), Some(large));
        assert_eq!(matrix.get("B", "D"), Some(large));
        assert_eq!(matrix.residual(), Decimal::ZERO);
        assert_eq!(ledger.query_balances(&["A", "B", "C", "D"]).unwrap(), vec![Decimal::ZERO; 4]);
    }
}
