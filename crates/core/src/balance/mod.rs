//! Net balance calculation.
//!
//! Folds an ordered sequence of expenses into one signed balance per person:
//! positive means the person is owed money overall, negative means they owe.
//! Every accumulation step is rounded to whole cents.

#[cfg(test)]
mod props;

use divvy_shared::types::{round_currency, PersonId};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::expense::{compute_shares, Expense};
use crate::settlement::Payment;

/// Net balance per person, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Balances(IndexMap<PersonId, Decimal>);

impl Balances {
    /// Balance of `person`, zero when the person has never appeared.
    #[must_use]
    pub fn get_or_zero(&self, person: &str) -> Decimal {
        self.0.get(person).copied().unwrap_or(Decimal::ZERO)
    }

    /// Adds `delta` to a person's balance and rounds the result to cents.
    ///
    /// Unseen people start from zero. A sum beyond the decimal range
    /// saturates and is logged.
    pub fn adjust(&mut self, person: &PersonId, delta: Decimal) {
        let balance = self.0.entry(person.clone()).or_insert(Decimal::ZERO);
        let sum = balance.checked_add(delta).unwrap_or_else(|| {
            warn!(%person, balance = %*balance, %delta, "Balance overflowed; saturating");
            balance.saturating_add(delta)
        });
        *balance = round_currency(sum);
    }

    /// Applies a payment: the payer's debt shrinks and the payee's credit
    /// shrinks by the same amount.
    pub fn apply(&mut self, payment: &Payment) {
        self.adjust(&payment.from, payment.amount);
        self.adjust(&payment.to, -payment.amount);
    }

    /// Iterates over `(person, balance)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, Decimal)> {
        self.0.iter().map(|(person, balance)| (person, *balance))
    }

    /// Sum of every balance; zero for a consistent ledger.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Number of people whose balance is not zero.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.0.values().filter(|balance| !balance.is_zero()).count()
    }

    /// Returns true if nobody owes or is owed anything.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outstanding() == 0
    }

    /// Number of people tracked, settled ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no expense has touched any person.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(PersonId, Decimal)> for Balances {
    fn from_iter<I: IntoIterator<Item = (PersonId, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Computes every person's net balance over a sequence of expenses.
///
/// For each expense, in order, every member's share is subtracted from their
/// balance and the full amount is credited to the payer. A payer who also
/// shares the expense goes through both steps.
#[must_use]
pub fn calculate_balances(expenses: &[Expense]) -> Balances {
    let mut balances = Balances::default();

    for expense in expenses {
        let shares = compute_shares(expense);
        for (person, share) in shares.iter() {
            balances.adjust(person, -share);
        }
        balances.adjust(&expense.paid_by, expense.amount);

        debug!(
            expense = %expense.label(),
            split_type = %expense.split_type,
            amount = %expense.amount,
            members = shares.len(),
            "Expense folded into balances"
        );
    }

    balances
}
