//! Record fixtures shared by the saldo test suites.
//!
//! Only for tests; the constructors panic on out-of-range calendar input
//! rather than returning results.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use saldo_core::{
    Amount, CounterpartyId, CounterpartyProfile, LineItem, PaymentKind, RawPaymentRecord,
    RawPurchaseRecord, RawSalesRecord, RecordId,
};

/// Shorthand calendar-date constructor.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Minimal counterparty profile with just an id and a name.
pub fn counterparty(id: u64, name: &str) -> CounterpartyProfile {
    CounterpartyProfile {
        id: CounterpartyId(id),
        name: name.to_string(),
        registration_no: None,
        phone: None,
        memo: None,
    }
}

/// Sales invoice with no memo and no line items.
pub fn sale(
    id: u64,
    counterparty: u64,
    traded_on: NaiveDate,
    supply: Amount,
    vat: Amount,
) -> RawSalesRecord {
    RawSalesRecord {
        id: RecordId(id),
        counterparty_id: CounterpartyId(counterparty),
        traded_on,
        supply_amount: supply,
        vat_amount: vat,
        memo: None,
        items: Vec::new(),
    }
}

/// Purchase invoice with no memo and no line items.
pub fn purchase(
    id: u64,
    counterparty: u64,
    traded_on: NaiveDate,
    supply: Amount,
    vat: Amount,
) -> RawPurchaseRecord {
    RawPurchaseRecord {
        id: RecordId(id),
        counterparty_id: CounterpartyId(counterparty),
        traded_on,
        supply_amount: supply,
        vat_amount: vat,
        memo: None,
        items: Vec::new(),
    }
}

/// Cash movement row of the given kind.
pub fn payment(
    id: u64,
    counterparty: u64,
    paid_on: NaiveDate,
    kind: PaymentKind,
    amount: Amount,
) -> RawPaymentRecord {
    RawPaymentRecord {
        id: RecordId(id),
        counterparty_id: CounterpartyId(counterparty),
        paid_on,
        kind,
        amount,
        memo: None,
    }
}

/// Invoice line with an integral quantity.
pub fn line_item(
    name: &str,
    quantity: i64,
    unit_price: Amount,
    supply: Amount,
    vat: Amount,
) -> LineItem {
    LineItem {
        name: name.to_string(),
        quantity: Decimal::from(quantity),
        unit_price,
        supply_amount: supply,
        vat_amount: vat,
    }
}
