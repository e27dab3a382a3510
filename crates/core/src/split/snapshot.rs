//! Ledger snapshots handed to the settlement engine.
//!
//! A snapshot is the caller's materialized view of one shared expense: the
//! participants plus every recorded expense and payment. Nothing is cached;
//! each call recomputes from the lists.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_shared::types::money::is_settled;
use splitledger_shared::types::round_cents;
use tracing::{debug, trace};

use super::balance::{calculate_balances, share_per_person, total_expenses};
use super::debt::calculate_debts;
use super::error::LedgerError;
use super::types::{Balance, Debt, Expense, Participant, Payment};

/// Immutable input to the settlement engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    /// Group members.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Recorded expenses.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Recorded direct payments.
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Balances and settlement plan for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    /// Net balance per participant.
    pub balances: Vec<Balance>,
    /// Suggested transfers.
    pub debts: Vec<Debt>,
    /// Sum of all expenses, rounded to cents.
    pub total_expenses: Decimal,
    /// Equal share per participant, rounded to cents.
    pub share_per_person: Decimal,
    /// True when every balance is within a cent of zero.
    pub is_settled: bool,
}

impl LedgerSnapshot {
    /// Creates a snapshot from the three input lists.
    #[must_use]
    pub fn new(
        participants: Vec<Participant>,
        expenses: Vec<Expense>,
        payments: Vec<Payment>,
    ) -> Self {
        Self {
            participants,
            expenses,
            payments,
        }
    }

    /// Net balance per participant.
    #[must_use]
    pub fn balances(&self) -> Vec<Balance> {
        calculate_balances(&self.participants, &self.expenses, &self.payments)
    }

    /// Suggested transfers that settle the snapshot.
    #[must_use]
    pub fn debts(&self) -> Vec<Debt> {
        calculate_debts(&self.balances())
    }

    /// Computes balances, debts and totals in one pass.
    #[must_use]
    pub fn summary(&self) -> SettlementSummary {
        let total = total_expenses(&self.expenses);
        let share = share_per_person(&self.participants, total);
        let balances = self.balances();
        let debts = calculate_debts(&balances);
        let settled = balances.iter().all(|b| is_settled(b.balance));

        debug!(
            participants = self.participants.len(),
            expenses = self.expenses.len(),
            payments = self.payments.len(),
            debts = debts.len(),
            %total,
            is_settled = settled,
            "Computed settlement summary"
        );

        SettlementSummary {
            balances,
            debts,
            total_expenses: round_cents(total),
            share_per_person: round_cents(share),
            is_settled: settled,
        }
    }

    /// Checks the snapshot against the ledger's entry rules.
    ///
    /// Participants are checked first, then expenses, then payments, each in
    /// list order; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`LedgerError`] found.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let mut known = HashSet::with_capacity(self.participants.len());
        for participant in &self.participants {
            if !known.insert(&participant.id) {
                return Err(LedgerError::DuplicateParticipant(participant.id.clone()));
            }
        }

        for expense in &self.expenses {
            if expense.amount <= Decimal::ZERO {
                return Err(LedgerError::NonPositiveExpense {
                    id: expense.id,
                    amount: expense.amount,
                });
            }
            if !known.contains(&expense.payer) {
                return Err(LedgerError::UnknownParticipant(expense.payer.clone()));
            }
        }

        for payment in &self.payments {
            if payment.amount <= Decimal::ZERO {
                return Err(LedgerError::NonPositivePayment {
                    id: payment.id,
                    amount: payment.amount,
                });
            }
            if payment.from == payment.to {
                return Err(LedgerError::SelfPayment {
                    id: payment.id,
                    participant: payment.from.clone(),
                });
            }
            for id in [&payment.from, &payment.to] {
                if !known.contains(id) {
                    return Err(LedgerError::UnknownParticipant(id.clone()));
                }
            }
        }

        trace!(
            participants = self.participants.len(),
            "Ledger snapshot passed validation"
        );
        Ok(())
    }
}
