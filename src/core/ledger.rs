//! Ledger module
//!
//! This module provides the `Ledger` struct which owns every person of a group
//! and their running balance.
//!
//! The Ledger is responsible for:
//! - Registering people with unique names and zero balances
//! - Applying expenses atomically (all balance changes or none)
//! - Answering balance queries in caller order
//! - Tracking the truncation residual so settlement can check the zero-sum invariant

use crate::core::settlement::SettlementEngine;
use crate::types::{Expense, LedgerError, Person, SettlementMatrix};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Owns the people of a single group and their balances
///
/// Every instance is independent; there is no shared or global state.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// People in registration order
    people: Vec<Person>,

    /// Name to position in `people`
    index: HashMap<String, usize>,

    /// Expected sum of all balances, the accumulated truncation residual
    unallocated: Decimal,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new person with a zero balance
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the name is empty or only whitespace
    /// - `DuplicatePerson` if the name is already registered
    pub fn register_person(&mut self, name: &str) -> Result<(), LedgerError> {
        if name.trim().is_empty() {
            return Err(LedgerError::invalid_name(name));
        }
        if self.index.contains_key(name) {
            return Err(LedgerError::duplicate_person(name));
        }

        self.index.insert(name.to_string(), self.people.len());
        self.people.push(Person::new(name));
        debug!(name, "registered person");

        Ok(())
    }

    /// Number of registered people
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Names of all registered people, in registration order
    pub fn list_people(&self) -> Vec<&str> {
        self.people.iter().map(|person| person.name.as_str()).collect()
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Current balance of a single person
    pub fn balance(&self, name: &str) -> Result<Decimal, LedgerError> {
        self.position(name).map(|idx| self.people[idx].balance)
    }

    /// Current balances of `names`, in the same order
    ///
    /// A single person is queried with a one-element slice.
    ///
    /// # Errors
    ///
    /// `UnknownPerson` for the first name that is not registered.
    pub fn query_balances<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Decimal>, LedgerError> {
        names.iter().map(|name| self.balance(name.as_ref())).collect()
    }

    /// Apply an expense: debit each payee and credit each payer by their share
    ///
    /// Shares are truncated to cents, so the debits (or credits) can add up to
    /// slightly less than the cost. That residual is not assigned to anyone;
    /// it is recorded so [`Ledger::unallocated`] always matches the balance sum.
    ///
    /// The expense is fully validated and every new balance computed before
    /// any of them is stored, so a failed call leaves the ledger untouched.
    ///
    /// # Errors
    ///
    /// - Validation errors for a non-positive cost, empty people lists or a malformed split
    /// - `UnknownPerson` if a payee or payer is not registered
    /// - `ArithmeticOverflow` if a balance would leave the representable range
    pub fn apply_expense(&mut self, expense: &Expense) -> Result<(), LedgerError> {
        expense.validate()?;

        let payees = self.positions(&expense.payees)?;
        let payers = self.positions(&expense.payers)?;
        let debits = expense.debits()?;
        let credits = expense.credits()?;

        let mut staged: HashMap<usize, Decimal> = HashMap::new();
        let mut delta = Decimal::ZERO;

        for (&idx, &amount) in payees.iter().zip(&debits) {
            let name = &self.people[idx].name;
            let balance = staged.entry(idx).or_insert(self.people[idx].balance);
            *balance = balance
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("debit", name))?;
            delta = delta
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("debit", name))?;
        }

        for (&idx, &amount) in payers.iter().zip(&credits) {
            let name = &self.people[idx].name;
            let balance = staged.entry(idx).or_insert(self.people[idx].balance);
            *balance = balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("credit", name))?;
            delta = delta
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("credit", name))?;
        }

        let unallocated = self
            .unallocated
            .checked_add(delta)
            .ok_or_else(|| LedgerError::arithmetic_overflow("residual", "ledger"))?;

        for (idx, balance) in staged {
            self.people[idx].balance = balance;
        }
        self.unallocated = unallocated;

        debug!(
            cost = %expense.cost,
            payees = expense.payees.len(),
            payers = expense.payers.len(),
            residual = %delta,
            "applied expense"
        );

        Ok(())
    }

    /// Sum of all current balances
    ///
    /// Credits and debts are added alternately, so the running total never
    /// exceeds the largest single balance until one side runs out.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` only if the sum itself is out of range.
    pub fn imbalance(&self) -> Result<Decimal, LedgerError> {
        let (credits, debts): (Vec<Decimal>, Vec<Decimal>) = self
            .people
            .iter()
            .map(|person| person.balance)
            .partition(|balance| balance.is_sign_positive());
        let mut credits = credits.into_iter();
        let mut debts = debts.into_iter();

        let mut total = Decimal::ZERO;
        loop {
            let next = if total > Decimal::ZERO {
                debts.next().or_else(|| credits.next())
            } else {
                credits.next().or_else(|| debts.next())
            };
            let Some(balance) = next else {
                break;
            };
            total = total
                .checked_add(balance)
                .ok_or_else(|| LedgerError::arithmetic_overflow("imbalance", "ledger"))?;
        }

        Ok(total)
    }

    /// Truncation residual accumulated since the last settlement
    ///
    /// Always equal to the sum returned by [`Ledger::imbalance`].
    pub fn unallocated(&self) -> Decimal {
        self.unallocated
    }

    /// Settle all balances and zero them, see [`SettlementEngine::settle`]
    pub fn settle(&mut self) -> Result<SettlementMatrix, LedgerError> {
        SettlementEngine.settle(self)
    }

    pub(crate) fn people(&self) -> &[Person] {
        &self.people
    }

    pub(crate) fn people_mut(&mut self) -> &mut [Person] {
        &mut self.people
    }

    pub(crate) fn reset_unallocated(&mut self) {
        self.unallocated = Decimal::ZERO;
    }

    fn position(&self, name: &str) -> Result<usize, LedgerError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::unknown_person(name))
    }

    fn positions(&self, names: &[String]) -> Result<Vec<usize>, LedgerError> {
        names.iter().map(|name| self.position(name)).collect()
    }
}
