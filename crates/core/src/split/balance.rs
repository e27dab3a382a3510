//! Equal-split balance calculation.
//!
//! Every participant owes an identical share of the total recorded expenses.
//! Payers are credited what they fronted, and direct payments move credit
//! from the receiver to the sender.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use splitledger_shared::types::{ParticipantId, round_cents};

use super::types::{Balance, Expense, Participant, Payment};

/// Unrounded per-participant accumulators, in first-seen order.
pub(crate) type Accumulators = IndexMap<ParticipantId, Decimal>;

/// Sum of all expense amounts.
#[must_use]
pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Equal share each participant owes, or zero when there is nobody to split
/// between.
///
/// Duplicate ids in `participants` each count toward the divisor.
#[must_use]
pub fn share_per_person(participants: &[Participant], total: Decimal) -> Decimal {
    if participants.is_empty() {
        return Decimal::ZERO;
    }
    total / Decimal::from(participants.len())
}

/// Computes the net balance of every participant.
///
/// Output order is the participant list order (duplicates collapse onto their
/// first position), followed by any ids that only appear in expenses or
/// payments, in first-seen order. Those phantom entries start at zero rather
/// than at minus the share. Each balance is rounded to cents, half away from
/// zero.
///
/// With no participants the result is empty.
#[must_use]
pub fn calculate_balances(
    participants: &[Participant],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<Balance> {
    accumulate(participants, expenses, payments)
        .into_iter()
        .map(|(participant, balance)| Balance {
            participant,
            balance: round_cents(balance),
        })
        .collect()
}

/// Builds the unrounded accumulators behind [`calculate_balances`].
pub(crate) fn accumulate(
    participants: &[Participant],
    expenses: &[Expense],
    payments: &[Payment],
) -> Accumulators {
    let mut balances = Accumulators::with_capacity(participants.len());
    if participants.is_empty() {
        return balances;
    }

    let share = share_per_person(participants, total_expenses(expenses));
    for participant in participants {
        balances.insert(participant.id.clone(), -share);
    }

    for expense in expenses {
        *balances.entry(expense.payer.clone()).or_default() += expense.amount;
    }

    for payment in payments {
        *balances.entry(payment.from.clone()).or_default() += payment.amount;
        *balances.entry(payment.to.clone()).or_default() -= payment.amount;
    }

    balances
}
