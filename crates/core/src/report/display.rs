//! Display helpers for the reporting layer.

use rust_decimal::Decimal;
use splitledger_shared::types::ParticipantId;
use splitledger_shared::types::money::{is_credit, is_debt};
use splitledger_shared::types::round_cents;

use crate::split::Participant;

/// Label used for ids with no resolvable name.
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";

/// Display name of a participant, if the id is listed and has one.
#[must_use]
pub fn display_name<'a>(id: &ParticipantId, participants: &'a [Participant]) -> Option<&'a str> {
    participants
        .iter()
        .find(|p| &p.id == id)
        .and_then(|p| p.display_name.as_deref())
}

/// Looks up the display name of a participant.
///
/// Falls back to [`UNKNOWN_PARTICIPANT`] when the id is missing from the list
/// or the participant has no name.
#[must_use]
pub fn participant_name<'a>(id: &ParticipantId, participants: &'a [Participant]) -> &'a str {
    display_name(id, participants).unwrap_or(UNKNOWN_PARTICIPANT)
}

/// Formats an amount with two decimals.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}

/// Formats a balance with an explicit sign.
///
/// Credits get a leading `+`, debts a leading `-`, and anything inside the
/// tolerance band prints as `0.00`.
#[must_use]
pub fn format_balance(amount: Decimal) -> String {
    if is_credit(amount) {
        format!("+{}", format_amount(amount))
    } else if is_debt(amount) {
        format_amount(amount)
    } else {
        format_amount(Decimal::ZERO)
    }
}
