//! Share computation for a single expense.

use divvy_shared::types::PersonId;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::types::{Expense, SplitType};

/// Portion of one expense carried by each member of `shared_between`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShareMap(IndexMap<PersonId, Decimal>);

impl ShareMap {
    /// Share carried by `person`, zero when the person has no entry.
    #[must_use]
    pub fn share_of(&self, person: &str) -> Decimal {
        self.0.get(person).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of all shares.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Iterates over `(person, share)` in member order.
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, Decimal)> {
        self.0.iter().map(|(person, share)| (person, *share))
    }

    /// Number of members carrying a share.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nobody carries a share.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(PersonId, Decimal)> for ShareMap {
    fn from_iter<I: IntoIterator<Item = (PersonId, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Computes each member's share of an expense.
///
/// - `equal`: the amount divided by the member count.
/// - `percentage`: `percent * amount / 100`; members without a percentage
///   carry nothing.
/// - `exact`: the recorded value as-is; members without one carry nothing.
///
/// Shares are not rounded here. Rounding happens when a share is folded into
/// a running balance, so the shares of an uneven split may leave a cent of
/// drift in the balances. Only members of `shared_between` appear in the
/// result. Duplicate members count once.
#[must_use]
pub fn compute_shares(expense: &Expense) -> ShareMap {
    let members = expense.participants();

    match expense.split_type {
        SplitType::Equal => {
            let count = Decimal::from(members.len());
            let share = if count.is_zero() {
                Decimal::ZERO
            } else {
                expense.amount / count
            };
            members.into_iter().map(|person| (person.clone(), share)).collect()
        }
        SplitType::Percentage => members
            .into_iter()
            .map(|person| {
                let percent = expense.split_detail(person.as_str());
                (person.clone(), percentage_share(expense, percent))
            })
            .collect(),
        SplitType::Exact => members
            .into_iter()
            .map(|person| (person.clone(), expense.split_detail(person.as_str())))
            .collect(),
    }
}

/// `percent * amount / 100`, saturating when the product overflows.
fn percentage_share(expense: &Expense, percent: Decimal) -> Decimal {
    let product = expense.amount.checked_mul(percent).unwrap_or_else(|| {
        warn!(
            expense = %expense.label(),
            amount = %expense.amount,
            %percent,
            "Percentage share overflowed; saturating"
        );
        expense.amount.saturating_mul(percent)
    });
    product / Decimal::ONE_HUNDRED
}
