//! Reading recorded expenses from disk.

use std::path::Path;

use divvy_core::expense::{order_by_creation, validate_expense, Expense};
use divvy_shared::{AppError, AppResult};
use tracing::{debug, info};

/// Reads, orders and optionally validates the expenses stored at `path`.
pub fn load_expenses(path: &Path, validate: bool) -> AppResult<Vec<Expense>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;

    let expenses = parse_expenses(&raw, validate)?;
    info!(
        path = %path.display(),
        expenses = expenses.len(),
        "Expenses loaded"
    );
    Ok(expenses)
}

/// Parses a JSON array of expenses and orders it by creation time.
///
/// With `validate`, the first invalid expense aborts the whole load.
pub fn parse_expenses(raw: &str, validate: bool) -> AppResult<Vec<Expense>> {
    let mut expenses: Vec<Expense> =
        serde_json::from_str(raw).map_err(|e| AppError::Input(e.to_string()))?;

    if validate {
        for (index, expense) in expenses.iter().enumerate() {
            validate_expense(expense).map_err(|e| {
                AppError::Validation(format!("expense #{index} ({}): {e}", expense.label()))
            })?;
        }
        debug!(expenses = expenses.len(), "Expenses validated");
    }

    order_by_creation(&mut expenses);
    Ok(expenses)
}
