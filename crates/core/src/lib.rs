//! Settlement engine for Divvy.
//!
//! This crate contains pure settlement logic with ZERO storage or transport
//! dependencies. It turns an ordered sequence of shared expenses into
//! per-person net balances and reduces those balances to a short list of
//! payments.
//!
//! # Modules
//!
//! - `expense` - Expense records, split rules, share computation, validation
//! - `balance` - Net balance per person
//! - `settlement` - Greedy payment plan that clears the balances
//! - `summary` - People listing and per-person category summaries
//!
//! # Example
//!
//! ```
//! use divvy_core::expense::{Expense, SplitType};
//! use divvy_core::{calculate_balances, simplify_settlements};
//! use rust_decimal_macros::dec;
//!
//! let expenses = [Expense::new(dec!(90), "A", ["A", "B", "C"], SplitType::Equal)];
//! let balances = calculate_balances(&expenses);
//! assert_eq!(balances.get_or_zero("A"), dec!(60));
//!
//! let payments = simplify_settlements(&balances);
//! assert_eq!(payments.len(), 2);
//! ```

pub mod balance;
pub mod expense;
pub mod settlement;
pub mod summary;

pub use balance::{calculate_balances, Balances};
pub use settlement::{simplify_settlements, Payment, SettlementError, SettlementSimplifier};
