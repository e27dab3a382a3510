//! Settlement suggestions from net balances.
//!
//! Greedy largest-first matching: the biggest debtor pays the biggest creditor
//! until one of them is within a cent of zero, then the cursor on that side
//! moves on. Each step clears at least one side, so the plan has at most
//! `debtors + creditors - 1` transfers.

use splitledger_shared::types::money::{is_credit, is_debt, is_settled};
use splitledger_shared::types::round_cents;

use super::types::{Balance, Debt};

/// Computes the transfers that bring every balance within a cent of zero.
///
/// Balances inside the `[-0.01, 0.01]` band are ignored. Debtors are matched
/// most-negative first and creditors most-positive first; ties keep their
/// input order. Debts are returned in the order they were generated, each
/// amount rounded to cents. Residual dust below a cent is left unsettled.
#[must_use]
pub fn calculate_debts(balances: &[Balance]) -> Vec<Debt> {
    let mut debtors: Vec<Balance> = balances
        .iter()
        .filter(|b| is_debt(b.balance))
        .cloned()
        .collect();
    let mut creditors: Vec<Balance> = balances
        .iter()
        .filter(|b| is_credit(b.balance))
        .cloned()
        .collect();

    // Stable sorts: equal balances keep their relative order.
    debtors.sort_by(|a, b| a.balance.cmp(&b.balance));
    creditors.sort_by(|a, b| b.balance.cmp(&a.balance));

    let mut debts = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let settle_amount = debtor.balance.abs().min(creditor.balance);

        debts.push(Debt {
            from: debtor.participant.clone(),
            to: creditor.participant.clone(),
            amount: round_cents(settle_amount),
        });

        debtor.balance += settle_amount;
        creditor.balance -= settle_amount;

        if is_settled(debtor.balance) {
            i += 1;
        }
        if is_settled(creditor.balance) {
            j += 1;
        }
    }

    debts
}

/// Returns the balances left after every debt in `debts` is paid.
///
/// The debtor's balance rises by the amount and the creditor's falls by it.
/// Ids not present in `balances` are ignored.
#[must_use]
pub fn apply_debts(balances: &[Balance], debts: &[Debt]) -> Vec<Balance> {
    let mut remaining = balances.to_vec();
    for debt in debts {
        if let Some(from) = remaining.iter_mut().find(|b| b.participant == debt.from) {
            from.balance += debt.amount;
        }
        if let Some(to) = remaining.iter_mut().find(|b| b.participant == debt.to) {
            to.balance -= debt.amount;
        }
    }
    remaining
}
