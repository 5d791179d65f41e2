//! Running-balance stamping.

use saldo_core::Amount;

use crate::LedgerEntry;

/// Walk the ordered entries once and stamp each with the balance after it.
///
/// This is the only writer of [`LedgerEntry::balance`] and runs exactly
/// once, after the final statement order is established. The pass is
/// inherently sequential: each balance depends on the previous one.
pub fn apply_running_balance(entries: &mut [LedgerEntry], opening: Amount) {
    let mut balance = opening;
    for entry in entries {
        balance += entry.signed_total();
        entry.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_payments, normalize_sales};
    use saldo_core::PaymentKind;
    use saldo_test_utils::{date, payment, sale};

    #[test]
    fn chains_balances_from_the_opening() {
        let mut entries = normalize_sales(
            &[sale(1, 10, date(2025, 1, 5), 100_000, 10_000)],
            "Hanbit Metals",
        )
        .unwrap();
        entries.extend(
            normalize_payments(
                &[payment(1, 10, date(2025, 1, 10), PaymentKind::Receipt, 50_000)],
                "Hanbit Metals",
            )
            .unwrap(),
        );
        apply_running_balance(&mut entries, 40_000);
        assert_eq!(entries[0].balance, 150_000);
        assert_eq!(entries[1].balance, 100_000);
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut entries: Vec<LedgerEntry> = Vec::new();
        apply_running_balance(&mut entries, 7_000);
        assert!(entries.is_empty());
    }
}
