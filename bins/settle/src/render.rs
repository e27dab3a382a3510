//! Text and JSON rendering of settlement reports.

use std::fmt::Write as _;

use serde::Serialize;
use splitledger_core::LedgerSnapshot;
use splitledger_core::report::{
    CloseValidation, UNKNOWN_PARTICIPANT, display_name, format_amount, format_balance,
    validate_close,
};
use splitledger_core::split::{Participant, SettlementSummary};
use splitledger_shared::types::ParticipantId;
use splitledger_shared::{AppError, AppResult};

/// Everything the report shows for one snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub summary: SettlementSummary,
    pub close: CloseValidation,
}

impl Report {
    pub fn build(snapshot: &LedgerSnapshot) -> Self {
        let summary = snapshot.summary();
        let close = validate_close(&snapshot.expenses, &summary.balances);
        Self { summary, close }
    }
}

/// Name to print for a participant; unresolved ids keep the raw id visible.
fn label(id: &ParticipantId, participants: &[Participant]) -> String {
    display_name(id, participants).map_or_else(
        || format!("{UNKNOWN_PARTICIPANT} ({id})"),
        ToString::to_string,
    )
}

/// Renders the report as aligned plain text.
pub fn text(report: &Report, participants: &[Participant]) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Total expenses:   {}", format_amount(summary.total_expenses));
    let _ = writeln!(out, "Share per person: {}", format_amount(summary.share_per_person));

    let names: Vec<String> = summary
        .balances
        .iter()
        .map(|b| label(&b.participant, participants))
        .collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);

    let _ = writeln!(out, "\nBalances");
    for (name, balance) in names.iter().zip(&summary.balances) {
        let _ = writeln!(out, "  {name:<width$}  {:>12}", format_balance(balance.balance));
    }

    let _ = writeln!(out, "\nSettlement");
    if summary.debts.is_empty() {
        let _ = writeln!(out, "  Nothing to settle");
    }
    for debt in &summary.debts {
        let _ = writeln!(
            out,
            "  {} -> {}: {}",
            label(&debt.from, participants),
            label(&debt.to, participants),
            format_amount(debt.amount)
        );
    }

    let _ = writeln!(out);
    if report.close.can_close {
        let _ = write!(out, "Status: ready to close");
    } else {
        let _ = write!(out, "Status: open");
        for reason in &report.close.reasons {
            let _ = write!(out, "\n  - {reason}");
        }
    }

    out
}

/// Renders the report as pretty-printed JSON.
pub fn json(report: &Report) -> AppResult<String> {
    serde_json::to_string_pretty(report).map_err(|err| AppError::Internal(err.to_string()))
}
