//! Expense records and the rules for dividing them.
//!
//! This module covers everything about a single expense:
//! - The expense record and its split rule
//! - Share computation (who carries how much of one expense)
//! - Upstream validation applied before an expense is recorded
//! - Error types for rejected expenses

pub mod error;
pub mod share;
pub mod types;
pub mod validation;

pub use error::ExpenseError;
pub use share::{compute_shares, ShareMap};
pub use types::{newest_first, order_by_creation, Category, Expense, SplitDetails, SplitType};
pub use validation::validate_expense;
