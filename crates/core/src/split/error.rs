//! Ledger boundary validation errors.
//!
//! The calculators accept anything; these errors are raised only by
//! [`LedgerSnapshot::validate`](super::LedgerSnapshot::validate) for callers
//! that want strict input checking.

use rust_decimal::Decimal;
use splitledger_shared::AppError;
use splitledger_shared::types::{ExpenseId, ParticipantId, PaymentId};
use thiserror::Error;

/// Errors found when validating a ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The same participant id is listed twice.
    #[error("Participant {0} is listed more than once")]
    DuplicateParticipant(ParticipantId),

    /// Expense amount is zero or negative.
    #[error("Expense {id} has non-positive amount {amount}")]
    NonPositiveExpense {
        /// The expense ID.
        id: ExpenseId,
        /// The offending amount.
        amount: Decimal,
    },

    /// Payment amount is zero or negative.
    #[error("Payment {id} has non-positive amount {amount}")]
    NonPositivePayment {
        /// The payment ID.
        id: PaymentId,
        /// The offending amount.
        amount: Decimal,
    },

    /// Payment sender and receiver are the same participant.
    #[error("Payment {id} is sent from {participant} to themselves")]
    SelfPayment {
        /// The payment ID.
        id: PaymentId,
        /// The participant on both sides.
        participant: ParticipantId,
    },

    /// An expense or payment references an id missing from the participant list.
    #[error("Unknown participant: {0}")]
    UnknownParticipant(ParticipantId),
}

impl LedgerError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            Self::NonPositiveExpense { .. } => "NON_POSITIVE_EXPENSE",
            Self::NonPositivePayment { .. } => "NON_POSITIVE_PAYMENT",
            Self::SelfPayment { .. } => "SELF_PAYMENT",
            Self::UnknownParticipant(_) => "UNKNOWN_PARTICIPANT",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(format!("{err} ({})", err.error_code()))
    }
}
