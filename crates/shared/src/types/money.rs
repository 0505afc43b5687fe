//! Currency rounding with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` and are rounded to whole cents
//! whenever they are accumulated.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for every currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to whole cents.
///
/// Midpoints round away from zero, so `0.005` becomes `0.01` and `-0.005`
/// becomes `-0.01`.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
