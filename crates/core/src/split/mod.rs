//! Equal-split accounting and debt settlement.
//!
//! This module implements the settlement engine:
//! - Domain types (participants, expenses, payments, balances, debts)
//! - Balance calculation from a ledger snapshot
//! - Greedy largest-first settlement suggestions
//! - Boundary validation for callers that want strict input

pub mod balance;
pub mod debt;
pub mod error;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod balance_props;
#[cfg(test)]
mod debt_props;

pub use balance::{calculate_balances, share_per_person, total_expenses};
pub use debt::{apply_debts, calculate_debts};
pub use error::LedgerError;
pub use snapshot::{LedgerSnapshot, SettlementSummary};
pub use types::{Balance, Debt, Expense, Participant, Payment};
