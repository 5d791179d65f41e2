//! Period aggregation with a cross-checked closing balance.

use serde::{Deserialize, Serialize};

use saldo_core::Amount;

use crate::{EntryKind, LedgerEntry, LedgerError, LedgerResult};

/// Per-kind movement totals for one reporting period.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_sales: Amount,
    pub total_purchase: Amount,
    pub total_receipt: Amount,
    pub total_disbursement: Amount,
    pub final_balance: Amount,
    pub transaction_count: usize,
}

/// Aggregate the final entry sequence and cross-check the closing balance.
///
/// The closing balance is derived twice: once from the last stamped entry
/// and once from the opening balance plus the signed per-kind totals. The
/// two must agree exactly; divergence means the balance pass or the sign
/// rule is broken and is reported as [`LedgerError::BalanceMismatch`].
pub fn summarize(entries: &[LedgerEntry], opening: Amount) -> LedgerResult<LedgerSummary> {
    let mut summary = LedgerSummary {
        transaction_count: entries.len(),
        ..Default::default()
    };
    for entry in entries {
        match entry.kind {
            EntryKind::Sales => summary.total_sales += entry.total_amount,
            EntryKind::Purchase => summary.total_purchase += entry.total_amount,
            EntryKind::Receipt => summary.total_receipt += entry.total_amount,
            EntryKind::Disbursement => summary.total_disbursement += entry.total_amount,
        }
    }
    let derived = opening + summary.total_sales - summary.total_purchase - summary.total_receipt
        + summary.total_disbursement;
    let walked = entries.last().map(|entry| entry.balance).unwrap_or(opening);
    if walked != derived {
        return Err(LedgerError::BalanceMismatch { walked, derived });
    }
    summary.final_balance = walked;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::apply_running_balance;
    use crate::normalize::{normalize_payments, normalize_purchases, normalize_sales};
    use saldo_core::PaymentKind;
    use saldo_test_utils::{date, payment, purchase, sale};

    fn stamped_entries() -> Vec<LedgerEntry> {
        let mut entries = normalize_sales(
            &[sale(1, 10, date(2025, 1, 5), 100_000, 10_000)],
            "Hanbit Metals",
        )
        .unwrap();
        entries.extend(
            normalize_purchases(&[purchase(2, 10, date(2025, 1, 8), 20_000, 2_000)], "Hanbit Metals")
                .unwrap(),
        );
        entries.extend(
            normalize_payments(
                &[payment(3, 10, date(2025, 1, 10), PaymentKind::Receipt, 50_000)],
                "Hanbit Metals",
            )
            .unwrap(),
        );
        apply_running_balance(&mut entries, 0);
        entries
    }

    #[test]
    fn totals_split_by_kind() {
        let entries = stamped_entries();
        let summary = summarize(&entries, 0).unwrap();
        assert_eq!(summary.total_sales, 110_000);
        assert_eq!(summary.total_purchase, 22_000);
        assert_eq!(summary.total_receipt, 50_000);
        assert_eq!(summary.total_disbursement, 0);
        assert_eq!(summary.final_balance, 38_000);
        assert_eq!(summary.transaction_count, 3);
    }

    #[test]
    fn empty_period_keeps_the_opening_balance() {
        let summary = summarize(&[], 42_000).unwrap();
        assert_eq!(summary.final_balance, 42_000);
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn detects_a_broken_balance_pass() {
        let mut entries = stamped_entries();
        // Corrupt the stamped balance the way a second, stale pass would.
        entries.last_mut().unwrap().balance += 1;
        let err = summarize(&entries, 0).unwrap_err();
        match err {
            LedgerError::BalanceMismatch { walked, derived } => {
                assert_eq!(walked, 38_001);
                assert_eq!(derived, 38_000);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
