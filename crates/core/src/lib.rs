//! Settlement engine for SplitLedger.
//!
//! This crate contains pure business logic with ZERO file, network or runtime
//! dependencies. Callers hand in a ledger snapshot and get balances and a
//! settlement plan back.
//!
//! # Modules
//!
//! - `split` - Equal-split balances and debt settlement
//! - `report` - Close-out rule and display helpers

pub mod report;
pub mod split;

pub use split::{LedgerSnapshot, calculate_balances, calculate_debts};
