//! Statement rendering - plain text and JSON
//!
//! The plain text format follows the source system's layout: one line per
//! history entry (timestamp, type, amount), then the current balance.

use minibank_business::StatementView;
use minibank_core::format_brl;

const HEADER: &str = "================ STATEMENT ================";
const FOOTER: &str = "===========================================";

/// Render a statement as line-formatted text.
pub fn render_statement(view: &StatementView) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!(
        "Branch: {}    Account: {}    Holder: {}\n",
        view.branch, view.account_number, view.owner_name
    ));

    if view.entries.is_empty() {
        out.push_str("No transactions recorded.\n");
    } else {
        for entry in &view.entries {
            out.push_str(&format!(
                "{} - {}: {}\n",
                entry.timestamp.format("%d-%m-%Y %H:%M:%S"),
                entry.kind,
                format_brl(entry.amount)
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!("Current balance: {}\n", format_brl(view.balance)));
    out.push_str(FOOTER);
    out
}

/// Render a statement as pretty-printed JSON.
pub fn render_statement_json(view: &StatementView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
