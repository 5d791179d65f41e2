//! Deterministic chronological merge of the normalized entry streams.

use std::cmp::Ordering;

use saldo_core::Period;

use crate::LedgerEntry;

/// Total order for statement lines: date ascending, then kind (sales,
/// purchase, receipt, disbursement), then source row id ascending.
///
/// The comparator is total, so the output never depends on input order or
/// on the stability of the underlying sort.
pub fn statement_order(a: &LedgerEntry, b: &LedgerEntry) -> Ordering {
    a.date
        .cmp(&b.date)
        .then(a.kind.cmp(&b.kind))
        .then(a.id.source.cmp(&b.id.source))
}

/// Concatenate the streams, keep entries inside the inclusive window, and
/// sort into the statement order.
pub fn merge_window(streams: Vec<Vec<LedgerEntry>>, period: Period) -> Vec<LedgerEntry> {
    let mut entries: Vec<LedgerEntry> = streams
        .into_iter()
        .flatten()
        .filter(|entry| period.contains(entry.date))
        .collect();
    entries.sort_unstable_by(statement_order);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_payments, normalize_purchases, normalize_sales};
    use saldo_core::PaymentKind;
    use saldo_test_utils::{date, payment, purchase, sale};

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let period = Period::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        let sales = normalize_sales(
            &[
                sale(1, 10, date(2024, 12, 31), 1_000, 0),
                sale(2, 10, date(2025, 1, 1), 2_000, 0),
                sale(3, 10, date(2025, 1, 31), 3_000, 0),
                sale(4, 10, date(2025, 2, 1), 4_000, 0),
            ],
            "Hanbit Metals",
        )
        .unwrap();
        let merged = merge_window(vec![sales], period);
        let totals: Vec<_> = merged.iter().map(|entry| entry.total_amount).collect();
        assert_eq!(totals, vec![2_000, 3_000]);
    }

    #[test]
    fn same_day_entries_follow_the_kind_rank() {
        let day = date(2025, 3, 10);
        let period = Period::new(day, day).unwrap();
        let sales = normalize_sales(&[sale(5, 10, day, 1_000, 0)], "Hanbit Metals").unwrap();
        let purchases =
            normalize_purchases(&[purchase(5, 10, day, 2_000, 0)], "Hanbit Metals").unwrap();
        let payments = normalize_payments(
            &[
                payment(5, 10, day, PaymentKind::Disbursement, 400),
                payment(4, 10, day, PaymentKind::Receipt, 300),
            ],
            "Hanbit Metals",
        )
        .unwrap();
        // Deliberately feed the streams out of order.
        let merged = merge_window(vec![payments, purchases, sales], period);
        let kinds: Vec<_> = merged.iter().map(|entry| entry.kind.as_str()).collect();
        assert_eq!(kinds, vec!["sales", "purchase", "receipt", "disbursement"]);
    }

    #[test]
    fn same_day_same_kind_orders_by_row_id() {
        let day = date(2025, 3, 10);
        let period = Period::new(day, day).unwrap();
        let sales = normalize_sales(
            &[
                sale(9, 10, day, 1_000, 0),
                sale(2, 10, day, 2_000, 0),
                sale(5, 10, day, 3_000, 0),
            ],
            "Hanbit Metals",
        )
        .unwrap();
        let merged = merge_window(vec![sales], period);
        let ids: Vec<_> = merged.iter().map(|entry| entry.id.source.0).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
