//! Property-based tests for settlement suggestions.
//!
//! - Convergence of zero-sum balance lists
//! - Transfer count bound
//! - Direction and shape of every debt
//! - Settled lists and determinism

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use splitledger_shared::types::money::{is_credit, is_debt, is_settled};
use splitledger_shared::types::round_cents;

use super::balance::calculate_balances;
use super::debt::{apply_debts, calculate_debts};
use super::types::{Balance, Expense, Participant};

/// Strategy to generate a zero-sum balance list in even cents.
///
/// Even cents keep every non-zero balance at least two cents away from zero,
/// so nothing lands on the tolerance edge.
fn zero_sum_balances() -> impl Strategy<Value = Vec<Balance>> {
    prop::collection::vec(-50_000i64..50_000i64, 1..12).prop_map(|values| {
        let mut balances: Vec<Balance> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Balance::new(format!("p{i}"), Decimal::new(v * 2, 2)))
            .collect();
        let sum: Decimal = balances.iter().map(|b| b.balance).sum();
        balances.push(Balance::new("last", -sum));
        balances
    })
}

/// Strategy to generate arbitrary balances in whole cents.
fn any_balances() -> impl Strategy<Value = Vec<Balance>> {
    prop::collection::vec(-100_000i64..100_000i64, 0..12).prop_map(|values| {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Balance::new(format!("p{i}"), Decimal::new(*v, 2)))
            .collect()
    })
}

/// Strategy to generate balances strictly inside the tolerance band.
fn settled_balances() -> impl Strategy<Value = Vec<Balance>> {
    prop::collection::vec(-9i64..=9i64, 0..12).prop_map(|values| {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Balance::new(format!("p{i}"), Decimal::new(*v, 3)))
            .collect()
    })
}

/// Strategy to generate a group where payers cover arbitrary expenses.
fn expense_group() -> impl Strategy<Value = (Vec<Participant>, Vec<Expense>)> {
    (1usize..=8).prop_flat_map(|n| {
        let people: Vec<Participant> = (0..n).map(|i| Participant::new(format!("p{i}"))).collect();
        let expenses = prop::collection::vec((0..n, 1i64..1_000_000i64), 0..10);
        (Just(people), expenses).prop_map(|(people, expenses)| {
            let expenses = expenses
                .into_iter()
                .map(|(payer, cents)| {
                    Expense::new(people[payer].id.clone(), Decimal::new(cents, 2))
                })
                .collect();
            (people, expenses)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Paying every suggested debt settles a zero-sum list exactly.
    #[test]
    fn prop_zero_sum_balances_converge(balances in zero_sum_balances()) {
        let debts = calculate_debts(&balances);
        let remaining = apply_debts(&balances, &debts);
        for balance in &remaining {
            prop_assert!(
                is_settled(balance.balance),
                "{} left at {}",
                balance.participant,
                balance.balance
            );
        }
    }

    /// Balances from a real group settle to within the accumulated rounding.
    #[test]
    fn prop_group_balances_converge((people, expenses) in expense_group()) {
        let balances = calculate_balances(&people, &expenses, &[]);
        let remaining = apply_debts(&balances, &calculate_debts(&balances));
        let bound = dec!(0.015) * Decimal::from(people.len());
        for balance in &remaining {
            prop_assert!(balance.balance.abs() <= bound);
        }
    }

    /// At most `debtors + creditors - 1` transfers.
    #[test]
    fn prop_debt_count_bound(balances in any_balances()) {
        let debtors = balances.iter().filter(|b| is_debt(b.balance)).count();
        let creditors = balances.iter().filter(|b| is_credit(b.balance)).count();
        let debts = calculate_debts(&balances);
        if debtors == 0 || creditors == 0 {
            prop_assert!(debts.is_empty());
        } else {
            prop_assert!(debts.len() < debtors + creditors);
        }
    }

    /// Debts flow from debtors to creditors in positive whole cents.
    #[test]
    fn prop_debts_are_well_formed(balances in any_balances()) {
        for debt in calculate_debts(&balances) {
            prop_assert!(debt.amount > Decimal::ZERO);
            prop_assert_eq!(round_cents(debt.amount), debt.amount);
            prop_assert_ne!(&debt.from, &debt.to);

            let from = balances.iter().find(|b| b.participant == debt.from).map(|b| b.balance);
            let to = balances.iter().find(|b| b.participant == debt.to).map(|b| b.balance);
            prop_assert!(from.is_some_and(is_debt));
            prop_assert!(to.is_some_and(is_credit));
        }
    }

    /// The largest debtor always pays first, to the largest creditor.
    #[test]
    fn prop_first_debt_matches_extremes(balances in any_balances()) {
        let debts = calculate_debts(&balances);
        if let Some(first) = debts.first() {
            let min = balances.iter().map(|b| b.balance).min().unwrap_or_default();
            let max = balances.iter().map(|b| b.balance).max().unwrap_or_default();
            let from = balances.iter().find(|b| b.participant == first.from).map(|b| b.balance);
            let to = balances.iter().find(|b| b.participant == first.to).map(|b| b.balance);
            prop_assert_eq!(from, Some(min));
            prop_assert_eq!(to, Some(max));
        }
    }

    /// Nothing to do when everyone is within a cent.
    #[test]
    fn prop_settled_balances_produce_no_debts(balances in settled_balances()) {
        prop_assert!(calculate_debts(&balances).is_empty());
    }

    /// Same input, same plan.
    #[test]
    fn prop_resolution_is_deterministic(balances in any_balances()) {
        prop_assert_eq!(calculate_debts(&balances), calculate_debts(&balances));
    }
}
