//! CSV ingestion into an in-memory record source.
//!
//! The data directory mirrors the originating SQL tables: one file per
//! table, amounts as decimal-formatted strings, invoice lines in their
//! own files joined by record id. Everything numeric is converted to
//! minor units here, exactly once.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use saldo_core::{
    parse_amount, BusinessId, CounterpartyId, CounterpartyProfile, LineItem, PaymentKind,
    RawPaymentRecord, RawPurchaseRecord, RawSalesRecord, RecordId,
};
use saldo_ledger::MemoryRecordSource;

#[derive(Debug, Deserialize)]
struct CounterpartyRow {
    id: u64,
    name: String,
    #[serde(default)]
    registration_no: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    memo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InvoiceRow {
    id: u64,
    counterparty_id: u64,
    date: NaiveDate,
    supply_amount: String,
    vat_amount: String,
    #[serde(default)]
    memo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemRow {
    record_id: u64,
    name: String,
    quantity: String,
    unit_price: String,
    supply_amount: String,
    vat_amount: String,
}

#[derive(Debug, Deserialize)]
struct PaymentRow {
    id: u64,
    counterparty_id: u64,
    date: NaiveDate,
    kind: String,
    amount: String,
    #[serde(default)]
    memo: Option<String>,
}

/// Read every export under `dir` into a [`MemoryRecordSource`] owned by
/// the given business.
pub fn load_records(dir: &Path, scale: u32, business: BusinessId) -> Result<MemoryRecordSource> {
    let counterparty_file = dir.join("counterparties.csv");
    if !counterparty_file.exists() {
        bail!("missing {}", counterparty_file.display());
    }
    let source = MemoryRecordSource::new();

    for row in read_rows::<CounterpartyRow>(&counterparty_file)? {
        source.insert_counterparty(
            business,
            CounterpartyProfile {
                id: CounterpartyId(row.id),
                name: row.name,
                registration_no: row.registration_no,
                phone: row.phone,
                memo: row.memo,
            },
        );
    }

    let mut sale_items = load_items(&dir.join("sale_items.csv"), scale)?;
    for row in read_rows::<InvoiceRow>(&dir.join("sales.csv"))? {
        let items = sale_items.remove(&row.id).unwrap_or_default();
        source.insert_sale(
            business,
            RawSalesRecord {
                id: RecordId(row.id),
                counterparty_id: CounterpartyId(row.counterparty_id),
                traded_on: row.date,
                supply_amount: parse_amount(&row.supply_amount, scale)?,
                vat_amount: parse_amount(&row.vat_amount, scale)?,
                memo: row.memo,
                items,
            },
        );
    }

    let mut purchase_items = load_items(&dir.join("purchase_items.csv"), scale)?;
    for row in read_rows::<InvoiceRow>(&dir.join("purchases.csv"))? {
        let items = purchase_items.remove(&row.id).unwrap_or_default();
        source.insert_purchase(
            business,
            RawPurchaseRecord {
                id: RecordId(row.id),
                counterparty_id: CounterpartyId(row.counterparty_id),
                traded_on: row.date,
                supply_amount: parse_amount(&row.supply_amount, scale)?,
                vat_amount: parse_amount(&row.vat_amount, scale)?,
                memo: row.memo,
                items,
            },
        );
    }

    for row in read_rows::<PaymentRow>(&dir.join("payments.csv"))? {
        source.insert_payment(
            business,
            RawPaymentRecord {
                id: RecordId(row.id),
                counterparty_id: CounterpartyId(row.counterparty_id),
                paid_on: row.date,
                kind: payment_kind(&row.kind)?,
                amount: parse_amount(&row.amount, scale)?,
                memo: row.memo,
            },
        );
    }

    debug!(data_dir = %dir.display(), "loaded csv exports");
    Ok(source)
}

fn load_items(path: &Path, scale: u32) -> Result<HashMap<u64, Vec<LineItem>>> {
    let mut items: HashMap<u64, Vec<LineItem>> = HashMap::new();
    for row in read_rows::<ItemRow>(path)? {
        let quantity: Decimal = row
            .quantity
            .trim()
            .parse()
            .map_err(|_| anyhow!("bad quantity {:?} in {}", row.quantity, path.display()))?;
        items.entry(row.record_id).or_default().push(LineItem {
            name: row.name,
            quantity,
            unit_price: parse_amount(&row.unit_price, scale)?,
            supply_amount: parse_amount(&row.supply_amount, scale)?,
            vat_amount: parse_amount(&row.vat_amount, scale)?,
        });
    }
    Ok(items)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.with_context(|| format!("malformed row in {}", path.display()))?);
    }
    Ok(rows)
}

/// Map an export label onto a canonical payment kind.
///
/// Older ERP exports label cash rows in Korean; both spellings appear in
/// the wild and collapse onto the same two kinds.
fn payment_kind(label: &str) -> Result<PaymentKind> {
    match label.trim() {
        "입금" => Ok(PaymentKind::Receipt),
        "지급" => Ok(PaymentKind::Disbursement),
        other => other.parse::<PaymentKind>().map_err(|err| anyhow!(err)),
    }
}
