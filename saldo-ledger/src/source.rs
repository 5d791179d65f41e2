//! Record-source collaborator feeding the reconstruction pipeline.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

use saldo_core::{
    BusinessId, CounterpartyId, CounterpartyProfile, RawPaymentRecord, RawPurchaseRecord,
    RawSalesRecord,
};

/// Result alias for record-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure surfaced by a [`RecordSource`] implementation.
#[derive(Debug, Error)]
#[error("record source error: {0}")]
pub struct SourceError(String);

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Abstraction over whatever store holds the raw transaction history.
///
/// History methods return the complete, un-windowed history for the
/// counterparty; the opening-balance calculation depends on seeing all of
/// it. The four fetches are independent and safe to issue concurrently.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Resolve the counterparty profile, or `None` if it does not exist
    /// for this business.
    async fn counterparty(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Option<CounterpartyProfile>>;

    /// Every sales invoice ever recorded against the counterparty.
    async fn sales_history(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Vec<RawSalesRecord>>;

    /// Every purchase invoice ever recorded against the counterparty.
    async fn purchase_history(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Vec<RawPurchaseRecord>>;

    /// Every receipt and disbursement ever recorded against the counterparty.
    async fn payment_history(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Vec<RawPaymentRecord>>;
}

type Key = (BusinessId, CounterpartyId);

/// In-memory record source backing tests and the CLI loader.
#[derive(Debug, Default)]
pub struct MemoryRecordSource {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    counterparties: HashMap<Key, CounterpartyProfile>,
    sales: HashMap<Key, Vec<RawSalesRecord>>,
    purchases: HashMap<Key, Vec<RawPurchaseRecord>>,
    payments: HashMap<Key, Vec<RawPaymentRecord>>,
}

impl MemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_counterparty(&self, business: BusinessId, profile: CounterpartyProfile) {
        self.inner
            .write()
            .counterparties
            .insert((business, profile.id), profile);
    }

    pub fn insert_sale(&self, business: BusinessId, record: RawSalesRecord) {
        self.inner
            .write()
            .sales
            .entry((business, record.counterparty_id))
            .or_default()
            .push(record);
    }

    pub fn insert_purchase(&self, business: BusinessId, record: RawPurchaseRecord) {
        self.inner
            .write()
            .purchases
            .entry((business, record.counterparty_id))
            .or_default()
            .push(record);
    }

    pub fn insert_payment(&self, business: BusinessId, record: RawPaymentRecord) {
        self.inner
            .write()
            .payments
            .entry((business, record.counterparty_id))
            .or_default()
            .push(record);
    }

    /// Counterparty ids known for the business, in ascending order.
    pub fn counterparty_ids(&self, business: BusinessId) -> Vec<CounterpartyId> {
        let inner = self.inner.read();
        let mut ids: Vec<CounterpartyId> = inner
            .counterparties
            .keys()
            .filter(|(owner, _)| *owner == business)
            .map(|(_, id)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl RecordSource for MemoryRecordSource {
    async fn counterparty(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Option<CounterpartyProfile>> {
        Ok(self
            .inner
            .read()
            .counterparties
            .get(&(business, counterparty))
            .cloned())
    }

    async fn sales_history(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Vec<RawSalesRecord>> {
        Ok(self
            .inner
            .read()
            .sales
            .get(&(business, counterparty))
            .cloned()
            .unwrap_or_default())
    }

    async fn purchase_history(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Vec<RawPurchaseRecord>> {
        Ok(self
            .inner
            .read()
            .purchases
            .get(&(business, counterparty))
            .cloned()
            .unwrap_or_default())
    }

    async fn payment_history(
        &self,
        business: BusinessId,
        counterparty: CounterpartyId,
    ) -> SourceResult<Vec<RawPaymentRecord>> {
        Ok(self
            .inner
            .read()
            .payments
            .get(&(business, counterparty))
            .cloned()
            .unwrap_or_default())
    }
}
