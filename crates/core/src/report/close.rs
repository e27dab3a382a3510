//! Close-out rule for a shared expense.
//!
//! A shared expense may be closed once something was spent and every balance
//! is back within a cent of zero. Who may close it is an access-control
//! decision made elsewhere.

use serde::{Deserialize, Serialize};
use splitledger_shared::types::money::is_settled;

use crate::split::{Balance, Expense};

/// Reason a shared expense cannot be closed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloseBlocker {
    /// Nothing has been spent yet.
    NoExpenses,
    /// Some participants still owe or are owed at least a cent.
    UnsettledBalances {
        /// Number of participants outside the tolerance band.
        count: usize,
    },
}

impl std::fmt::Display for CloseBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoExpenses => write!(f, "At least one expense must be recorded"),
            Self::UnsettledBalances { count } => {
                write!(f, "{count} balance(s) must be settled before closing")
            }
        }
    }
}

/// Outcome of the close-out check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseValidation {
    /// True when nothing blocks closing.
    pub can_close: bool,
    /// Every blocker found, in check order.
    pub reasons: Vec<CloseBlocker>,
}

/// Checks whether a shared expense with these expenses and balances may close.
#[must_use]
pub fn validate_close(expenses: &[Expense], balances: &[Balance]) -> CloseValidation {
    let mut reasons = Vec::new();

    if expenses.is_empty() {
        reasons.push(CloseBlocker::NoExpenses);
    }

    let unsettled = balances.iter().filter(|b| !is_settled(b.balance)).count();
    if unsettled > 0 {
        reasons.push(CloseBlocker::UnsettledBalances { count: unsettled });
    }

    CloseValidation {
        can_close: reasons.is_empty(),
        reasons,
    }
}
