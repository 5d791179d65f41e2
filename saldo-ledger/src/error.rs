use chrono::NaiveDate;
use thiserror::Error;

use saldo_core::{Amount, CounterpartyId, PeriodError, RecordId};

use crate::source::SourceError;
use crate::EntryKind;

/// Result alias for statement reconstruction.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error type surfaced by statement reconstruction.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The requested counterparty does not exist for this business.
    #[error("counterparty {0} not found")]
    CounterpartyNotFound(CounterpartyId),
    /// A raw record violates a normalization invariant; nothing is coerced
    /// or dropped, the offending row is reported instead.
    #[error("invalid {kind} record {id}: {reason}")]
    InvalidRecord {
        kind: EntryKind,
        id: RecordId,
        reason: String,
    },
    /// The two independent closing-balance computations disagree. This is
    /// a defect in the balance pass or the sign rule, never valid data.
    #[error("balance mismatch: running pass ended at {walked}, movements imply {derived}")]
    BalanceMismatch { walked: Amount, derived: Amount },
    #[error("period start {start} is after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    /// The record source failed before the engine could run.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<PeriodError> for LedgerError {
    fn from(err: PeriodError) -> Self {
        Self::InvalidPeriod {
            start: err.start,
            end: err.end,
        }
    }
}
