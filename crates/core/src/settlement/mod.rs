//! Settlement simplification.
//!
//! Reduces net balances to a short list of payments using the greedy
//! two-pointer method: the largest debtor pays the largest creditor, and
//! whichever side is discharged moves on to the next in line. For `k` people
//! with a non-zero balance this emits at most `k - 1` payments. It is not
//! guaranteed to find the global minimum, which is an NP-hard problem.

#[cfg(test)]
mod props;

use divvy_shared::types::PersonId;
use divvy_shared::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::balance::Balances;

/// A single directed payment: `from` pays `amount` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// The debtor.
    pub from: PersonId,
    /// The creditor.
    pub to: PersonId,
    /// Amount paid, always positive.
    pub amount: Decimal,
}

impl Payment {
    /// Creates a payment instruction.
    #[must_use]
    pub fn new(from: impl Into<PersonId>, to: impl Into<PersonId>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Errors raised when settling balances strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// Debts and credits differ, so no payment plan can clear every balance.
    #[error("Balances do not sum to zero: owed {debits}, due {credits}")]
    Unbalanced {
        /// Total owed by debtors.
        debits: Decimal,
        /// Total due to creditors.
        credits: Decimal,
    },
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

/// Produces payment plans from balances.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementSimplifier {
    strict: bool,
}

impl SettlementSimplifier {
    /// Creates a simplifier; `strict` refuses balances that do not sum to zero.
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Settles whatever can be settled and logs any residual.
    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(false)
    }

    /// Refuses to settle balances that do not sum to zero.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(true)
    }

    /// Computes the payments that clear `balances`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `SettlementError::Unbalanced` when the total
    /// owed differs from the total due.
    pub fn simplify(&self, balances: &Balances) -> Result<Vec<Payment>, SettlementError> {
        if self.strict {
            let (debtors, creditors) = positions(balances);
            let debits = total(&debtors);
            let credits = total(&creditors);
            if debits != credits {
                return Err(SettlementError::Unbalanced { debits, credits });
            }
        }
        Ok(simplify_settlements(balances))
    }
}

/// Outstanding amount of one side of the ledger.
#[derive(Debug)]
struct Position<'a> {
    person: &'a PersonId,
    amount: Decimal,
}

/// Splits non-zero balances into debtors and creditors, both holding
/// positive amounts and sorted largest first. Equal amounts keep balance
/// order.
fn positions(balances: &Balances) -> (Vec<Position<'_>>, Vec<Position<'_>>) {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for (person, balance) in balances.iter() {
        if balance < Decimal::ZERO {
            debtors.push(Position {
                person,
                amount: -balance,
            });
        } else if balance > Decimal::ZERO {
            creditors.push(Position {
                person,
                amount: balance,
            });
        }
    }

    debtors.sort_by(|a, b| b.amount.cmp(&a.amount));
    creditors.sort_by(|a, b| b.amount.cmp(&a.amount));

    (debtors, creditors)
}

fn total(positions: &[Position<'_>]) -> Decimal {
    positions.iter().map(|p| p.amount).sum()
}

/// Computes the payments that clear `balances`.
///
/// Balances that do not sum to zero are settled as far as possible; the
/// unmatched remainder is logged and left unpaid.
#[must_use]
pub fn simplify_settlements(balances: &Balances) -> Vec<Payment> {
    let (mut debtors, mut creditors) = positions(balances);
    let mut payments = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
    let (mut d, mut c) = (0, 0);

    while d < debtors.len() && c < creditors.len() {
        let debtor = &mut debtors[d];
        let creditor = &mut creditors[c];
        let amount = debtor.amount.min(creditor.amount);

        payments.push(Payment {
            from: debtor.person.clone(),
            to: creditor.person.clone(),
            amount,
        });

        debtor.amount -= amount;
        creditor.amount -= amount;

        if debtor.amount.is_zero() {
            d += 1;
        }
        if creditor.amount.is_zero() {
            c += 1;
        }
    }

    let unpaid = total(&debtors[d..]);
    let uncollected = total(&creditors[c..]);
    if unpaid.is_zero() && uncollected.is_zero() {
        debug!(payments = payments.len(), "Balances settled");
    } else {
        warn!(
            %unpaid,
            %uncollected,
            payments = payments.len(),
            "Balances do not sum to zero; residual left unsettled"
        );
    }

    payments
}
