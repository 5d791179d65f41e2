//! Opening-balance derivation over the full counterparty history.

use chrono::NaiveDate;

use saldo_core::Amount;

use crate::LedgerEntry;

/// Net balance carried into the reporting period.
///
/// Sums every entry dated strictly before `period_start`; activity on the
/// start date itself belongs inside the period, not the carry-in. Callers
/// must pass the complete normalized history, not a windowed slice.
pub fn opening_balance(history: &[LedgerEntry], period_start: NaiveDate) -> Amount {
    history
        .iter()
        .filter(|entry| entry.date < period_start)
        .map(LedgerEntry::signed_total)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_payments, normalize_sales};
    use saldo_core::PaymentKind;
    use saldo_test_utils::{date, payment, sale};

    #[test]
    fn excludes_activity_on_the_start_date() {
        let sales = normalize_sales(
            &[
                sale(1, 10, date(2025, 1, 31), 200_000, 0),
                sale(2, 10, date(2025, 2, 1), 50_000, 0),
            ],
            "Hanbit Metals",
        )
        .unwrap();
        assert_eq!(opening_balance(&sales, date(2025, 2, 1)), 200_000);
    }

    #[test]
    fn applies_the_sign_rule_to_prior_activity() {
        let mut history = normalize_sales(
            &[sale(1, 10, date(2024, 12, 1), 100_000, 10_000)],
            "Hanbit Metals",
        )
        .unwrap();
        history.extend(
            normalize_payments(
                &[
                    payment(2, 10, date(2024, 12, 15), PaymentKind::Receipt, 60_000),
                    payment(3, 10, date(2024, 12, 20), PaymentKind::Disbursement, 5_000),
                ],
                "Hanbit Metals",
            )
            .unwrap(),
        );
        // 110,000 - 60,000 + 5,000
        assert_eq!(opening_balance(&history, date(2025, 1, 1)), 55_000);
    }

    #[test]
    fn empty_history_carries_nothing() {
        assert_eq!(opening_balance(&[], date(2025, 1, 1)), 0);
    }
}
