use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Amount, CounterpartyId, RecordId};

/// Direction of a cash movement between the business and a counterparty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Money received from the counterparty; reduces what they owe.
    Receipt,
    /// Money paid out to the counterparty; increases what they owe.
    Disbursement,
}

impl PaymentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentKind::Receipt => "receipt",
            PaymentKind::Disbursement => "disbursement",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receipt" => Ok(PaymentKind::Receipt),
            "disbursement" => Ok(PaymentKind::Disbursement),
            other => Err(format!("unknown payment kind: {other}")),
        }
    }
}

/// Single invoice line as stored by the record source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Amount,
    pub supply_amount: Amount,
    pub vat_amount: Amount,
}

/// Sales invoice header plus its lines. Increases the receivable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawSalesRecord {
    pub id: RecordId,
    pub counterparty_id: CounterpartyId,
    pub traded_on: NaiveDate,
    pub supply_amount: Amount,
    pub vat_amount: Amount,
    pub memo: Option<String>,
    pub items: Vec<LineItem>,
}

/// Purchase invoice header plus its lines. Increases the payable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawPurchaseRecord {
    pub id: RecordId,
    pub counterparty_id: CounterpartyId,
    pub traded_on: NaiveDate,
    pub supply_amount: Amount,
    pub vat_amount: Amount,
    pub memo: Option<String>,
    pub items: Vec<LineItem>,
}

/// Cash receipt or disbursement row.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawPaymentRecord {
    pub id: RecordId,
    pub counterparty_id: CounterpartyId,
    pub paid_on: NaiveDate,
    pub kind: PaymentKind,
    pub amount: Amount,
    pub memo: Option<String>,
}

/// Master-file profile of a trading partner, as shown on a statement header.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterpartyProfile {
    pub id: CounterpartyId,
    pub name: String,
    pub registration_no: Option<String>,
    pub phone: Option<String>,
    pub memo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_kind_round_trips_through_str() {
        for kind in [PaymentKind::Receipt, PaymentKind::Disbursement] {
            assert_eq!(kind.as_str().parse::<PaymentKind>(), Ok(kind));
        }
    }

    #[test]
    fn payment_kind_rejects_unknown_labels() {
        assert!("deposit".parse::<PaymentKind>().is_err());
    }
}
