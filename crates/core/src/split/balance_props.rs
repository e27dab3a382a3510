//! Property-based tests for balance calculation.
//!
//! - Zero-sum accumulation
//! - Cent rounding of every balance
//! - Empty and inactive groups
//! - Determinism

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use splitledger_shared::types::round_cents;

use super::balance::{accumulate, calculate_balances};
use super::types::{Expense, Participant, Payment};

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a group of 1 to 8 distinct participants.
fn participants() -> impl Strategy<Value = Vec<Participant>> {
    (1usize..=8).prop_map(|n| (0..n).map(|i| Participant::new(format!("p{i}"))).collect())
}

/// Strategy to generate a group with expenses and payments among its members.
fn group() -> impl Strategy<Value = (Vec<Participant>, Vec<Expense>, Vec<Payment>)> {
    participants().prop_flat_map(|people| {
        let n = people.len();
        let expenses = prop::collection::vec((0..n, positive_amount()), 0..12);
        let payments = prop::collection::vec((0..n, 0..n, positive_amount()), 0..8);
        (Just(people), expenses, payments).prop_map(|(people, expenses, payments)| {
            let expenses = expenses
                .into_iter()
                .map(|(payer, amount)| Expense::new(people[payer].id.clone(), amount))
                .collect();
            let payments = payments
                .into_iter()
                .filter(|(from, to, _)| from != to)
                .map(|(from, to, amount)| {
                    Payment::new(people[from].id.clone(), people[to].id.clone(), amount)
                })
                .collect();
            (people, expenses, payments)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Unrounded accumulators sum to zero, up to division residue.
    #[test]
    fn prop_accumulators_sum_to_zero((people, expenses, payments) in group()) {
        let sum: Decimal = accumulate(&people, &expenses, &payments).values().copied().sum();
        prop_assert!(
            sum.abs() < dec!(0.000000000001),
            "accumulators should sum to zero, got {}",
            sum
        );
    }

    /// Rounded balances drift from zero by at most half a cent per entry.
    #[test]
    fn prop_rounded_balances_nearly_zero_sum((people, expenses, payments) in group()) {
        let balances = calculate_balances(&people, &expenses, &payments);
        let sum: Decimal = balances.iter().map(|b| b.balance).sum();
        let bound = dec!(0.005) * Decimal::from(balances.len());
        prop_assert!(sum.abs() <= bound, "sum {} exceeds {}", sum, bound);
    }

    /// Every balance is already rounded to cents.
    #[test]
    fn prop_balances_are_whole_cents((people, expenses, payments) in group()) {
        for balance in calculate_balances(&people, &expenses, &payments) {
            prop_assert_eq!(round_cents(balance.balance), balance.balance);
        }
    }

    /// One entry per distinct participant, in input order.
    #[test]
    fn prop_one_entry_per_participant((people, expenses, payments) in group()) {
        let balances = calculate_balances(&people, &expenses, &payments);
        let ids: Vec<_> = balances.iter().map(|b| b.participant.clone()).collect();
        let expected: Vec<_> = people.iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(ids, expected);
    }

    /// No participants means no balances, whatever was recorded.
    #[test]
    fn prop_no_participants_is_empty((_, expenses, payments) in group()) {
        prop_assert!(calculate_balances(&[], &expenses, &payments).is_empty());
    }

    /// A group with no activity is all zero.
    #[test]
    fn prop_no_activity_is_all_zero(people in participants()) {
        let balances = calculate_balances(&people, &[], &[]);
        prop_assert_eq!(balances.len(), people.len());
        prop_assert!(balances.iter().all(|b| b.balance.is_zero()));
    }

    /// Same input, same output.
    #[test]
    fn prop_calculation_is_deterministic((people, expenses, payments) in group()) {
        prop_assert_eq!(
            calculate_balances(&people, &expenses, &payments),
            calculate_balances(&people, &expenses, &payments)
        );
    }
}

#[test]
fn test_thirds_round_but_stay_within_bound() {
    let people: Vec<Participant> = ["a", "b", "c"].into_iter().map(Participant::new).collect();
    let balances = calculate_balances(&people, &[Expense::new("a", dec!(100))], &[]);
    let sum: Decimal = balances.iter().map(|b| b.balance).sum();
    assert_eq!(sum, dec!(0.01));
}
