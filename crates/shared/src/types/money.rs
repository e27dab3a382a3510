//! Monetary precision rules shared by every layer.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`, already normalized to one currency.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places amounts are rounded to on output.
pub const CENT_PLACES: u32 = 2;

/// Absolute tolerance (one cent) within which a balance counts as settled.
///
/// Shared with the reporting layer and the close-out rule; must stay `0.01`.
pub const SETTLEMENT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, CENT_PLACES);

/// Rounds an amount to cents, half away from zero.
///
/// `2.345` becomes `2.35` and `-2.345` becomes `-2.35`. The result always
/// carries exactly two decimal places, so `200` becomes `200.00`.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CENT_PLACES);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Returns true if the amount lies strictly inside the tolerance band.
#[must_use]
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() < SETTLEMENT_TOLERANCE
}

/// Returns true if the amount is a credit beyond tolerance (`> 0.01`).
#[must_use]
pub fn is_credit(amount: Decimal) -> bool {
    amount > SETTLEMENT_TOLERANCE
}

/// Returns true if the amount is a debt beyond tolerance (`< -0.01`).
#[must_use]
pub fn is_debt(amount: Decimal) -> bool {
    amount < -SETTLEMENT_TOLERANCE
}
