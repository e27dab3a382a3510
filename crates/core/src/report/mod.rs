//! Reporting helpers built on top of settlement results.

pub mod close;
pub mod display;

pub use close::{CloseBlocker, CloseValidation, validate_close};
pub use display::{
    UNKNOWN_PARTICIPANT, display_name, format_amount, format_balance, participant_name,
};
