//! Expense error types.

use divvy_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an expense is rejected before it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Amount is zero or negative.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Amount is larger than any expense the ledger accepts.
    #[error("Amount {0} exceeds the maximum of {max}", max = super::validation::MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    /// Description is missing or blank.
    #[error("Missing required field: description")]
    MissingDescription,

    /// Payer is missing or blank.
    #[error("Missing required field: paid_by")]
    MissingPayer,

    /// Nobody shares the expense.
    #[error("At least one person must share the expense")]
    NoParticipants,

    /// One of the members of `shared_between` is blank.
    #[error("Participant names must not be blank")]
    BlankParticipant,

    /// Percentages do not sum to 100.
    #[error("Percentage must sum to 100, got {total}")]
    PercentageSum {
        /// Sum of the supplied percentages.
        total: Decimal,
    },

    /// Exact shares do not sum to the amount.
    #[error("Exact amounts must sum to total amount: {total} != {amount}")]
    ExactSum {
        /// Sum of the supplied shares.
        total: Decimal,
        /// Expense amount.
        amount: Decimal,
    },
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        Self::Validation(err.to_string())
    }
}
