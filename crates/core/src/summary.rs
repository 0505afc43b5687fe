//! People listing and per-person category summaries.

use divvy_shared::types::PersonId;
use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::expense::{Category, Expense};

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// Sum of expense amounts.
    pub total: Decimal,
    /// Number of expenses.
    pub count: usize,
}

/// Category breakdown of one person's expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// The person summarised.
    pub person: PersonId,
    /// Expenses the person paid for, by category.
    pub paid: Vec<CategoryTotal>,
    /// Expenses the person shares in, by category.
    pub shared: Vec<CategoryTotal>,
}

impl CategorySummary {
    /// Returns true if the person neither paid for nor shares any expense.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paid.is_empty() && self.shared.is_empty()
    }
}

/// Everyone who paid for or shares any expense, in first-appearance order.
///
/// Within one expense the payer comes before the members.
#[must_use]
pub fn people(expenses: &[Expense]) -> Vec<PersonId> {
    let mut seen: IndexSet<&PersonId> = IndexSet::new();
    for expense in expenses {
        seen.insert(&expense.paid_by);
        seen.extend(expense.shared_between.iter());
    }
    seen.into_iter().cloned().collect()
}

/// Groups the expenses a person paid for and the ones they share by category.
///
/// Amounts are whole expense amounts, not the person's share. Categories
/// appear in the order they are first met.
#[must_use]
pub fn category_summary(expenses: &[Expense], person: &PersonId) -> CategorySummary {
    let paid = group_by_category(expenses.iter().filter(|e| &e.paid_by == person));
    let shared = group_by_category(
        expenses
            .iter()
            .filter(|e| e.shared_between.contains(person)),
    );

    CategorySummary {
        person: person.clone(),
        paid,
        shared,
    }
}

fn group_by_category<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Vec<CategoryTotal> {
    let mut groups: IndexMap<Category, CategoryTotal> = IndexMap::new();
    for expense in expenses {
        let group = groups
            .entry(expense.category)
            .or_insert_with(|| CategoryTotal {
                category: expense.category,
                total: Decimal::ZERO,
                count: 0,
            });
        group.total += expense.amount;
        group.count += 1;
    }
    groups.into_values().collect()
}
