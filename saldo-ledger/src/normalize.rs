//! Raw-record to statement-line mapping.
//!
//! Pure per-record conversion: one entry per input, no filtering, no
//! sorting. Validation failures identify the offending row and category
//! so the caller can locate it in the source data.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use saldo_core::{
    Amount, LineItem, RawPaymentRecord, RawPurchaseRecord, RawSalesRecord, RecordId,
};

use crate::{EntryId, EntryKind, LedgerEntry, LedgerError, LedgerResult, LineItemSummary};

/// Header fields shared by sales and purchase invoices.
struct InvoiceParts<'a> {
    kind: EntryKind,
    id: RecordId,
    date: NaiveDate,
    supply_amount: Amount,
    vat_amount: Amount,
    memo: Option<String>,
    items: &'a [LineItem],
}

/// Map sales invoices into ledger entries.
pub fn normalize_sales(
    records: &[RawSalesRecord],
    counterparty: &str,
) -> LedgerResult<Vec<LedgerEntry>> {
    records
        .iter()
        .map(|record| {
            invoice_entry(
                InvoiceParts {
                    kind: EntryKind::Sales,
                    id: record.id,
                    date: record.traded_on,
                    supply_amount: record.supply_amount,
                    vat_amount: record.vat_amount,
                    memo: record.memo.clone(),
                    items: &record.items,
                },
                counterparty,
            )
        })
        .collect()
}

/// Map purchase invoices into ledger entries.
pub fn normalize_purchases(
    records: &[RawPurchaseRecord],
    counterparty: &str,
) -> LedgerResult<Vec<LedgerEntry>> {
    records
        .iter()
        .map(|record| {
            invoice_entry(
                InvoiceParts {
                    kind: EntryKind::Purchase,
                    id: record.id,
                    date: record.traded_on,
                    supply_amount: record.supply_amount,
                    vat_amount: record.vat_amount,
                    memo: record.memo.clone(),
                    items: &record.items,
                },
                counterparty,
            )
        })
        .collect()
}

/// Map receipt and disbursement rows into ledger entries.
pub fn normalize_payments(
    records: &[RawPaymentRecord],
    counterparty: &str,
) -> LedgerResult<Vec<LedgerEntry>> {
    records
        .iter()
        .map(|record| {
            let kind = EntryKind::from(record.kind);
            if record.amount < 0 {
                return Err(invalid(kind, record.id, "negative amount"));
            }
            Ok(LedgerEntry {
                id: EntryId::new(kind, record.id),
                date: record.paid_on,
                kind,
                counterparty: counterparty.to_string(),
                description: kind_label(kind).to_string(),
                memo: record.memo.clone(),
                supply_amount: record.amount,
                vat_amount: 0,
                total_amount: record.amount,
                items: None,
                balance: 0,
            })
        })
        .collect()
}

fn invoice_entry(parts: InvoiceParts<'_>, counterparty: &str) -> LedgerResult<LedgerEntry> {
    let InvoiceParts {
        kind,
        id,
        date,
        supply_amount,
        vat_amount,
        memo,
        items,
    } = parts;
    if supply_amount < 0 || vat_amount < 0 {
        return Err(invalid(kind, id, "negative amount"));
    }
    for item in items {
        if item.quantity < Decimal::ZERO {
            return Err(invalid(kind, id, "negative quantity"));
        }
        if item.supply_amount < 0 || item.vat_amount < 0 || item.unit_price < 0 {
            return Err(invalid(kind, id, "negative line amount"));
        }
    }
    // Some sources never backfilled header totals; fall back to the lines.
    let (supply, vat) = if supply_amount == 0 && !items.is_empty() {
        items.iter().fold((0, 0), |(supply, vat), item| {
            (supply + item.supply_amount, vat + item.vat_amount)
        })
    } else {
        (supply_amount, vat_amount)
    };
    let summary = summarize_items(items);
    let description = summary
        .as_ref()
        .map(LineItemSummary::label)
        .unwrap_or_else(|| kind_label(kind).to_string());
    Ok(LedgerEntry {
        id: EntryId::new(kind, id),
        date,
        kind,
        counterparty: counterparty.to_string(),
        description,
        memo,
        supply_amount: supply,
        vat_amount: vat,
        total_amount: supply + vat,
        items: summary,
        balance: 0,
    })
}

fn summarize_items(items: &[LineItem]) -> Option<LineItemSummary> {
    items.first().map(|first| LineItemSummary {
        first_item: first.name.clone(),
        remaining: items.len() - 1,
    })
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Sales => "Sales invoice",
        EntryKind::Purchase => "Purchase invoice",
        EntryKind::Receipt => "Receipt",
        EntryKind::Disbursement => "Disbursement",
    }
}

fn invalid(kind: EntryKind, id: RecordId, reason: &str) -> LedgerError {
    LedgerError::InvalidRecord {
        kind,
        id,
        reason: reason.to_string(),
    }
}
