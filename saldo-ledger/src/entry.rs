use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use saldo_core::{Amount, PaymentKind, RecordId};

/// Canonical statement line derived from one raw record.
///
/// Entries are rebuilt from scratch on every reconstruction and carry no
/// identity across calls. The `balance` field is stamped by the
/// running-balance pass and must not be read before it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub counterparty: String,
    pub description: String,
    pub memo: Option<String>,
    pub supply_amount: Amount,
    pub vat_amount: Amount,
    pub total_amount: Amount,
    pub items: Option<LineItemSummary>,
    /// Balance owed by the counterparty after this entry is applied.
    pub balance: Amount,
}

impl LedgerEntry {
    /// Signed effect of this entry on the running balance.
    pub fn signed_total(&self) -> Amount {
        self.kind.signum() * self.total_amount
    }
}

/// Composite identifier pairing a record category with its row id.
///
/// Row ids are only unique within one source table; the pair stays unique
/// across all four categories without numeric-range tricks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct EntryId {
    pub kind: EntryKind,
    pub source: RecordId,
}

impl EntryId {
    pub fn new(kind: EntryKind, source: RecordId) -> Self {
        Self { kind, source }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.source)
    }
}

/// Category of a statement line.
///
/// Declaration order doubles as the same-day merge order: sales, then
/// purchases, then receipts, then disbursements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Sales,
    Purchase,
    Receipt,
    Disbursement,
}

impl EntryKind {
    /// Direction the entry moves the counterparty balance: sales and
    /// disbursements raise what the counterparty owes, purchases and
    /// receipts lower it.
    pub fn signum(self) -> i64 {
        match self {
            EntryKind::Sales | EntryKind::Disbursement => 1,
            EntryKind::Purchase | EntryKind::Receipt => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Sales => "sales",
            EntryKind::Purchase => "purchase",
            EntryKind::Receipt => "receipt",
            EntryKind::Disbursement => "disbursement",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(EntryKind::Sales),
            "purchase" => Ok(EntryKind::Purchase),
            "receipt" => Ok(EntryKind::Receipt),
            "disbursement" => Ok(EntryKind::Disbursement),
            other => Err(format!("unknown entry kind: {other}")),
        }
    }
}

impl From<PaymentKind> for EntryKind {
    fn from(kind: PaymentKind) -> Self {
        match kind {
            PaymentKind::Receipt => EntryKind::Receipt,
            PaymentKind::Disbursement => EntryKind::Disbursement,
        }
    }
}

/// Compressed view of an invoice's lines for statement display.
///
/// Display-only; never participates in balance math.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LineItemSummary {
    pub first_item: String,
    pub remaining: usize,
}

impl LineItemSummary {
    pub fn label(&self) -> String {
        if self.remaining == 0 {
            self.first_item.clone()
        } else {
            format!("{} (+{} more)", self.first_item, self.remaining)
        }
    }
}
