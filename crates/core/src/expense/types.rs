//! Expense domain types.
//!
//! An expense is consumed read-only by the settlement engine. The fields
//! beyond the split rule (`description`, `category`, `created_at`) are
//! bookkeeping metadata used for validation, ordering and summaries.

use chrono::{DateTime, Utc};
use divvy_shared::types::{ExpenseId, PersonId};
use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Per-person values attached to a split; meaning depends on [`SplitType`].
pub type SplitDetails = IndexMap<PersonId, Decimal>;

/// Rule governing how an expense's amount is divided among its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Everyone carries the same share.
    Equal,
    /// `split_details` holds percentages of the amount.
    Percentage,
    /// `split_details` holds the shares themselves, in currency units.
    Exact,
}

impl std::fmt::Display for SplitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Percentage => write!(f, "percentage"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl std::str::FromStr for SplitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "percentage" => Ok(Self::Percentage),
            "exact" => Ok(Self::Exact),
            _ => Err(format!("Unknown split type: {s}")),
        }
    }
}

/// Spending category of an expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, restaurants.
    Food,
    /// Tickets, fuel, lodging.
    Travel,
    /// Events, subscriptions.
    Entertainment,
    /// General purchases.
    Shopping,
    /// Rent, utilities.
    Bills,
    /// Anything else.
    #[default]
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Food => write!(f, "Food"),
            Self::Travel => write!(f, "Travel"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Shopping => write!(f, "Shopping"),
            Self::Bills => write!(f, "Bills"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "travel" => Ok(Self::Travel),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "bills" => Ok(Self::Bills),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// A recorded shared expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned when the expense was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,
    /// Total cost, positive.
    pub amount: Decimal,
    /// What the money was spent on.
    #[serde(default)]
    pub description: String,
    /// Person who fronted the money.
    pub paid_by: PersonId,
    /// People who benefit from the expense. Treated as a set.
    pub shared_between: Vec<PersonId>,
    /// How `amount` is divided among `shared_between`.
    pub split_type: SplitType,
    /// Percentages or exact shares, keyed by person.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub split_details: SplitDetails,
    /// Spending category.
    #[serde(default)]
    pub category: Category,
    /// When the expense was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<SplitDetails, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<SplitDetails>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Expense {
    /// Creates an expense with no split details and default metadata.
    #[must_use]
    pub fn new(
        amount: Decimal,
        paid_by: impl Into<PersonId>,
        shared_between: impl IntoIterator<Item = impl Into<PersonId>>,
        split_type: SplitType,
    ) -> Self {
        Self {
            id: None,
            amount,
            description: String::new(),
            paid_by: paid_by.into(),
            shared_between: shared_between.into_iter().map(Into::into).collect(),
            split_type,
            split_details: SplitDetails::new(),
            category: Category::default(),
            created_at: None,
        }
    }

    /// Sets the split details.
    #[must_use]
    pub fn with_split_details(
        mut self,
        details: impl IntoIterator<Item = (impl Into<PersonId>, Decimal)>,
    ) -> Self {
        self.split_details = details.into_iter().map(|(p, v)| (p.into(), v)).collect();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Distinct members of `shared_between`, in listed order.
    #[must_use]
    pub fn participants(&self) -> IndexSet<&PersonId> {
        self.shared_between.iter().collect()
    }

    /// Split detail recorded for a person, zero when there is none.
    #[must_use]
    pub fn split_detail(&self, person: &str) -> Decimal {
        self.split_details.get(person).copied().unwrap_or(Decimal::ZERO)
    }

    /// Human-readable reference used in logs and error messages.
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.id, self.description.trim()) {
            (Some(id), _) => id.to_string(),
            (None, "") => format!("{} paid by {}", self.amount, self.paid_by),
            (None, description) => description.to_string(),
        }
    }
}

/// Orders expenses by creation time, oldest first.
///
/// The sort is stable; expenses without a timestamp come first in their
/// original relative order.
pub fn order_by_creation(expenses: &mut [Expense]) {
    expenses.sort_by_key(|expense| expense.created_at);
}

/// Expenses newest first, for listings.
///
/// Expenses without a timestamp come last. Equal timestamps keep input order.
#[must_use]
pub fn newest_first(expenses: &[Expense]) -> Vec<&Expense> {
    let mut listed: Vec<&Expense> = expenses.iter().collect();
    listed.sort_by_key(|expense| std::cmp::Reverse(expense.created_at));
    listed
}
