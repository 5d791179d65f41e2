//! Plain-text statement rendering.

use std::fmt::Write;

use saldo_core::{format_amount, Amount};
use saldo_ledger::Statement;

/// Render the statement as an aligned text table with an opening row and
/// a summary footer.
pub fn statement_table(statement: &Statement, scale: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Statement for {} ({} to {})",
        statement.counterparty.name, statement.period.start, statement.period.end
    );
    if let Some(registration) = &statement.counterparty.registration_no {
        let _ = writeln!(out, "Registration no. {registration}");
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{:<12} {:<13} {:<32} {:>14} {:>12} {:>14} {:>14}",
        "DATE", "KIND", "DESCRIPTION", "SUPPLY", "VAT", "TOTAL", "BALANCE"
    );
    let _ = writeln!(
        out,
        "{:<12} {:<13} {:<32} {:>14} {:>12} {:>14} {:>14}",
        "", "opening", "", "", "", "", money(statement.opening_balance, scale)
    );
    for entry in &statement.entries {
        let _ = writeln!(
            out,
            "{:<12} {:<13} {:<32} {:>14} {:>12} {:>14} {:>14}",
            entry.date.to_string(),
            entry.kind.as_str(),
            entry.description,
            money(entry.supply_amount, scale),
            money(entry.vat_amount, scale),
            money(entry.total_amount, scale),
            money(entry.balance, scale),
        );
    }
    out.push('\n');
    let summary = &statement.summary;
    let _ = writeln!(
        out,
        "sales {} | purchases {} | receipts {} | disbursements {}",
        money(summary.total_sales, scale),
        money(summary.total_purchase, scale),
        money(summary.total_receipt, scale),
        money(summary.total_disbursement, scale),
    );
    let _ = writeln!(
        out,
        "closing balance {} ({} transactions)",
        money(summary.final_balance, scale),
        summary.transaction_count
    );
    out
}

fn money(amount: Amount, scale: u32) -> String {
    group_thousands(&format_amount(amount, scale))
}

fn group_thousands(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut out = format!("{sign}{grouped}");
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("110000"), "110,000");
        assert_eq!(group_thousands("-1234567"), "-1,234,567");
        assert_eq!(group_thousands("1234.56"), "1,234.56");
    }
}
