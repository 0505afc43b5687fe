//! Validation applied to an expense before it is recorded.
//!
//! The settlement engine never calls this; it trusts its input and degrades
//! leniently. Collaborators that accept expenses run these checks first.

use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::types::{Expense, SplitType};

/// Largest amount, in whole currency units, a single expense may carry.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Validates a single expense.
///
/// # Errors
///
/// Returns the first rule the expense violates.
pub fn validate_expense(expense: &Expense) -> Result<(), ExpenseError> {
    if expense.amount <= Decimal::ZERO {
        return Err(ExpenseError::InvalidAmount(expense.amount));
    }

    if expense.amount > Decimal::from(MAX_AMOUNT) {
        return Err(ExpenseError::AmountTooLarge(expense.amount));
    }

    if expense.description.trim().is_empty() {
        return Err(ExpenseError::MissingDescription);
    }

    if expense.paid_by.is_blank() {
        return Err(ExpenseError::MissingPayer);
    }

    if expense.shared_between.is_empty() {
        return Err(ExpenseError::NoParticipants);
    }

    if expense.shared_between.iter().any(|p| p.is_blank()) {
        return Err(ExpenseError::BlankParticipant);
    }

    let total: Decimal = expense.split_details.values().copied().sum();
    match expense.split_type {
        SplitType::Equal => {}
        SplitType::Percentage => {
            if total != Decimal::ONE_HUNDRED {
                return Err(ExpenseError::PercentageSum { total });
            }
        }
        SplitType::Exact => {
            if total != expense.amount {
                return Err(ExpenseError::ExactSum {
                    total,
                    amount: expense.amount,
                });
            }
        }
    }

    Ok(())
}
