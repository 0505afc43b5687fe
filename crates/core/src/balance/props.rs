//! Property-based tests for balance calculation.
//!
//! - Zero-sum: balances over any well-formed expense sequence sum to zero,
//!   up to half a cent of rounding per share
//! - Accumulation: the balances of a sequence equal the per-person sum of
//!   each expense's isolated contribution
//! - No-op: people paying exactly their own share end up settled and need
//!   no payments

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculate_balances;
use crate::expense::{Expense, SplitType};
use crate::settlement::simplify_settlements;

const PEOPLE: [&str; 6] = ["ana", "ben", "cleo", "dev", "eli", "fay"];

/// Strategy to generate a positive amount in cents (0.01 to 10,000.00).
fn cents() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

/// Strategy to generate a non-empty subset of people, in roster order.
fn members() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(PEOPLE.to_vec(), 1..=PEOPLE.len())
}

/// Splits `total` in proportion to `weights`; the parts sum to `total`.
fn partition(total: i64, weights: &[i64]) -> Vec<i64> {
    let weight_sum: i64 = weights.iter().sum();
    let mut parts: Vec<i64> = weights.iter().map(|w| total * w / weight_sum).collect();
    let assigned: i64 = parts.iter().sum();
    if let Some(last) = parts.last_mut() {
        *last += total - assigned;
    }
    parts
}

/// Strategy to generate a well-formed expense of any split type.
fn expense() -> impl Strategy<Value = Expense> {
    (
        cents(),
        prop::sample::select(PEOPLE.to_vec()),
        members(),
        0u8..3,
        prop::collection::vec(1i64..100, PEOPLE.len()),
    )
        .prop_map(|(amount_cents, payer, members, kind, weights)| {
            let amount = Decimal::new(amount_cents, 2);
            let weights = &weights[..members.len()];
            match kind {
                0 => Expense::new(amount, payer, members, SplitType::Equal),
                1 => {
                    let percents = partition(10_000, weights);
                    let details: Vec<(&str, Decimal)> = members
                        .iter()
                        .zip(percents)
                        .map(|(person, bp)| (*person, Decimal::new(bp, 2)))
                        .collect();
                    Expense::new(amount, payer, members, SplitType::Percentage)
                        .with_split_details(details)
                }
                _ => {
                    let shares = partition(amount_cents, weights);
                    let details: Vec<(&str, Decimal)> = members
                        .iter()
                        .zip(shares)
                        .map(|(person, c)| (*person, Decimal::new(c, 2)))
                        .collect();
                    Expense::new(amount, payer, members, SplitType::Exact)
                        .with_split_details(details)
                }
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* sequence of well-formed expenses, the balances SHALL sum to
    /// zero within the rounding of each share to the cent.
    #[test]
    fn prop_balances_sum_to_zero(
        expenses in prop::collection::vec(expense(), 1..20),
    ) {
        let balances = calculate_balances(&expenses);
        let shares: usize = expenses.iter().map(|e| e.participants().len()).sum();
        let tolerance = Decimal::new(5, 3) * Decimal::from(shares);
        prop_assert!(
            balances.total().abs() <= tolerance,
            "Drift {} exceeds {}", balances.total(), tolerance
        );
    }

    /// *For any* sequence of exact splits in whole cents, the balances SHALL
    /// sum to exactly zero.
    #[test]
    fn prop_exact_splits_sum_to_zero(
        expenses in prop::collection::vec(expense(), 1..20),
    ) {
        let exact: Vec<Expense> = expenses
            .into_iter()
            .filter(|e| e.split_type == SplitType::Exact)
            .collect();
        prop_assert_eq!(calculate_balances(&exact).total(), Decimal::ZERO);
    }

    /// *For any* two expenses, folding both SHALL equal summing the isolated
    /// contribution of each, person by person.
    #[test]
    fn prop_multi_expense_accumulation(
        first in expense(),
        second in expense(),
    ) {
        let combined = calculate_balances(&[first.clone(), second.clone()]);
        let a = calculate_balances(&[first]);
        let b = calculate_balances(&[second]);

        for (person, balance) in combined.iter() {
            prop_assert_eq!(
                balance,
                a.get_or_zero(person.as_str()) + b.get_or_zero(person.as_str()),
                "Mismatch for {}", person
            );
        }
    }

    /// *For any* set of people who each pay exactly their own expense, every
    /// balance SHALL be zero.
    #[test]
    fn prop_self_paid_expenses_are_settled(
        amounts in prop::collection::vec(cents(), PEOPLE.len()),
    ) {
        let expenses: Vec<Expense> = PEOPLE
            .iter()
            .zip(amounts)
            .map(|(person, c)| Expense::new(Decimal::new(c, 2), *person, [*person], SplitType::Equal))
            .collect();
        let balances = calculate_balances(&expenses);
        prop_assert!(balances.is_settled());
        prop_assert_eq!(balances.len(), PEOPLE.len());
        prop_assert!(simplify_settlements(&balances).is_empty());
    }
}

