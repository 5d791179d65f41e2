//! Statement assembly: concurrent history fetch plus the pure pipeline.

use futures::try_join;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use saldo_core::{
    Amount, BusinessId, CounterpartyId, CounterpartyProfile, Period, RawPaymentRecord,
    RawPurchaseRecord, RawSalesRecord,
};

use crate::balance::apply_running_balance;
use crate::merge::merge_window;
use crate::normalize::{normalize_payments, normalize_purchases, normalize_sales};
use crate::opening::opening_balance;
use crate::source::RecordSource;
use crate::summary::{summarize, LedgerSummary};
use crate::{LedgerEntry, LedgerError, LedgerResult};

/// Parameters identifying one statement reconstruction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatementRequest {
    pub business: BusinessId,
    pub counterparty: CounterpartyId,
    pub period: Period,
}

/// Fully reconstructed account statement for one counterparty and period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Statement {
    pub counterparty: CounterpartyProfile,
    pub period: Period,
    pub opening_balance: Amount,
    pub entries: Vec<LedgerEntry>,
    pub summary: LedgerSummary,
}

/// Fetch the counterparty's history and reconstruct its statement.
///
/// The profile lookup and the three history fetches are independent and
/// issued concurrently; everything after the join is pure computation.
pub async fn build_statement(
    source: &dyn RecordSource,
    request: StatementRequest,
) -> LedgerResult<Statement> {
    let (profile, sales, purchases, payments) = try_join!(
        source.counterparty(request.business, request.counterparty),
        source.sales_history(request.business, request.counterparty),
        source.purchase_history(request.business, request.counterparty),
        source.payment_history(request.business, request.counterparty),
    )?;
    let profile = profile.ok_or(LedgerError::CounterpartyNotFound(request.counterparty))?;
    assemble(profile, &sales, &purchases, &payments, request.period)
}

/// Reconstruct a statement from already-fetched history collections.
///
/// The collections must cover the counterparty's entire history; the
/// opening balance is derived from everything dated before the window.
pub fn assemble(
    counterparty: CounterpartyProfile,
    sales: &[RawSalesRecord],
    purchases: &[RawPurchaseRecord],
    payments: &[RawPaymentRecord],
    period: Period,
) -> LedgerResult<Statement> {
    let sales_entries = normalize_sales(sales, &counterparty.name)?;
    let purchase_entries = normalize_purchases(purchases, &counterparty.name)?;
    let payment_entries = normalize_payments(payments, &counterparty.name)?;
    debug!(
        counterparty = %counterparty.id,
        sales = sales_entries.len(),
        purchases = purchase_entries.len(),
        payments = payment_entries.len(),
        "normalized counterparty history"
    );

    let streams = vec![sales_entries, purchase_entries, payment_entries];
    let opening = streams
        .iter()
        .map(|stream| opening_balance(stream, period.start))
        .sum();

    let mut entries = merge_window(streams, period);
    apply_running_balance(&mut entries, opening);
    let summary = summarize(&entries, opening)?;
    info!(
        counterparty = %counterparty.id,
        entries = entries.len(),
        opening,
        closing = summary.final_balance,
        "statement reconstructed"
    );

    Ok(Statement {
        counterparty,
        period,
        opening_balance: opening,
        entries,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryRecordSource;
    use saldo_core::PaymentKind;
    use saldo_test_utils::{counterparty, date, payment, sale};

    fn request(counterparty_id: u64) -> StatementRequest {
        StatementRequest {
            business: BusinessId(1),
            counterparty: CounterpartyId(counterparty_id),
            period: Period::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap(),
        }
    }

    #[tokio::test]
    async fn fetches_and_reconstructs() {
        let source = MemoryRecordSource::new();
        source.insert_counterparty(BusinessId(1), counterparty(10, "Hanbit Metals"));
        source.insert_sale(BusinessId(1), sale(1, 10, date(2025, 1, 5), 100_000, 10_000));
        source.insert_payment(
            BusinessId(1),
            payment(1, 10, date(2025, 1, 10), PaymentKind::Receipt, 50_000),
        );

        let statement = build_statement(&source, request(10)).await.unwrap();
        assert_eq!(statement.opening_balance, 0);
        assert_eq!(statement.entries.len(), 2);
        assert_eq!(statement.summary.final_balance, 60_000);
    }

    #[tokio::test]
    async fn unknown_counterparty_is_not_found() {
        let source = MemoryRecordSource::new();
        let err = build_statement(&source, request(99)).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::CounterpartyNotFound(CounterpartyId(99))
        ));
    }

    #[tokio::test]
    async fn histories_are_scoped_per_business() {
        let source = MemoryRecordSource::new();
        source.insert_counterparty(BusinessId(1), counterparty(10, "Hanbit Metals"));
        source.insert_sale(BusinessId(2), sale(1, 10, date(2025, 1, 5), 100_000, 0));

        let statement = build_statement(&source, request(10)).await.unwrap();
        assert!(statement.entries.is_empty());
        assert_eq!(statement.summary.final_balance, 0);
    }
}
