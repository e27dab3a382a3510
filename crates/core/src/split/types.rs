//! Domain types for shared-expense accounting.
//!
//! Wire names follow the ledger store's documents (`payerContactId`,
//! `fromContactId`, ...) so snapshots exported by the store decode as-is.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_shared::types::{ExpenseId, ParticipantId, PaymentId};

/// A member of the group sharing expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Resolved contact id.
    pub id: ParticipantId,
    /// Name to show in reports, if the caller resolved one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Participant {
    /// Creates a participant without a display name.
    #[must_use]
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// An amount one participant paid on behalf of the whole group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID.
    #[serde(default)]
    pub id: ExpenseId,
    /// Who fronted the money.
    #[serde(rename = "payerContactId")]
    pub payer: ParticipantId,
    /// Amount paid. Must be positive.
    pub amount: Decimal,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Date the expense was incurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Expense {
    /// Creates an expense with a fresh id and no metadata.
    #[must_use]
    pub fn new(payer: impl Into<ParticipantId>, amount: Decimal) -> Self {
        Self {
            id: ExpenseId::new(),
            payer: payer.into(),
            amount,
            description: String::new(),
            date: None,
        }
    }
}

/// A direct transfer already made between two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment ID.
    #[serde(default)]
    pub id: PaymentId,
    /// Who sent the money.
    #[serde(rename = "fromContactId")]
    pub from: ParticipantId,
    /// Who received it.
    #[serde(rename = "toContactId")]
    pub to: ParticipantId,
    /// Amount transferred. Must be positive.
    pub amount: Decimal,
    /// Date of the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Payment {
    /// Creates a payment with a fresh id and no date.
    #[must_use]
    pub fn new(
        from: impl Into<ParticipantId>,
        to: impl Into<ParticipantId>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            from: from.into(),
            to: to.into(),
            amount,
            date: None,
        }
    }
}

/// Net position of one participant against the group.
///
/// Positive: the participant is owed money. Negative: the participant owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Participant the balance belongs to.
    #[serde(rename = "participantContactId")]
    pub participant: ParticipantId,
    /// Net balance, rounded to cents.
    pub balance: Decimal,
}

impl Balance {
    /// Creates a balance entry.
    #[must_use]
    pub fn new(participant: impl Into<ParticipantId>, balance: Decimal) -> Self {
        Self {
            participant: participant.into(),
            balance,
        }
    }
}

/// A suggested transfer that moves two balances toward zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Debtor who should pay.
    #[serde(rename = "fromContactId")]
    pub from: ParticipantId,
    /// Creditor who should receive.
    #[serde(rename = "toContactId")]
    pub to: ParticipantId,
    /// Amount to transfer, rounded to cents.
    pub amount: Decimal,
}
