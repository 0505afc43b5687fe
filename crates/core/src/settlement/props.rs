//! Property-based tests for settlement simplification.
//!
//! - Completeness: applying every payment clears every balance
//! - Bound: `k` non-zero balances need at most `k - 1` payments
//! - Direction: payments flow from debtors to creditors, positive amounts only

use divvy_shared::types::PersonId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{simplify_settlements, SettlementSimplifier};
use crate::balance::{calculate_balances, Balances};
use crate::expense::{Expense, SplitType};

/// Strategy to generate zero-sum balances for up to 12 people.
///
/// The last person absorbs whatever makes the total zero.
fn zero_sum_balances() -> impl Strategy<Value = Balances> {
    prop::collection::vec(-1_000_000i64..1_000_000i64, 1..12).prop_map(|cents| {
        let last = -cents.iter().sum::<i64>();
        cents
            .into_iter()
            .chain(std::iter::once(last))
            .enumerate()
            .map(|(i, c)| (PersonId::new(format!("p{i}")), Decimal::new(c, 2)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* zero-sum balances, applying the payments in order SHALL
    /// drive every balance to exactly zero.
    #[test]
    fn prop_payments_clear_all_balances(balances in zero_sum_balances()) {
        let payments = simplify_settlements(&balances);
        let mut remaining = balances.clone();
        for payment in &payments {
            remaining.apply(payment);
        }
        prop_assert!(remaining.is_settled(), "Left over: {:?}", remaining);
    }

    /// *For any* zero-sum balances with `k` non-zero entries, the plan SHALL
    /// contain at most `k - 1` payments.
    #[test]
    fn prop_payment_count_bound(balances in zero_sum_balances()) {
        let payments = simplify_settlements(&balances);
        let k = balances.outstanding();
        prop_assert!(payments.len() <= k.saturating_sub(1));
    }

    /// *For any* balances, every payment SHALL be positive and flow from
    /// someone who owes to someone who is owed.
    #[test]
    fn prop_payments_flow_from_debtors_to_creditors(balances in zero_sum_balances()) {
        for payment in simplify_settlements(&balances) {
            prop_assert!(payment.amount > Decimal::ZERO);
            prop_assert!(balances.get_or_zero(payment.from.as_str()) < Decimal::ZERO);
            prop_assert!(balances.get_or_zero(payment.to.as_str()) > Decimal::ZERO);
        }
    }

    /// *For any* zero-sum balances, strict mode SHALL agree with the lenient plan.
    #[test]
    fn prop_strict_matches_lenient_on_zero_sum(balances in zero_sum_balances()) {
        let strict = SettlementSimplifier::strict().simplify(&balances);
        prop_assert_eq!(strict, Ok(simplify_settlements(&balances)));
    }

    /// *For any* group dinner split equally, every payment SHALL go to the
    /// payer, covering as much of the guests' debt as the payer is owed.
    #[test]
    fn prop_equal_split_pays_back_payer(
        amount_cents in 1i64..10_000_000i64,
        guests in 1usize..10,
    ) {
        let mut members = vec!["host".to_string()];
        members.extend((0..guests).map(|i| format!("guest{i}")));
        let expense = Expense::new(Decimal::new(amount_cents, 2), "host", members, SplitType::Equal);
        let balances = calculate_balances(&[expense]);
        let owed: Decimal = balances
            .iter()
            .filter(|(person, _)| person.as_str() != "host")
            .map(|(_, balance)| -balance)
            .sum();

        let payments = simplify_settlements(&balances);
        let repaid: Decimal = payments.iter().map(|p| p.amount).sum();
        prop_assert!(payments.iter().all(|p| p.to.as_str() == "host"));
        prop_assert_eq!(repaid, owed.min(balances.get_or_zero("host")));
    }
}
