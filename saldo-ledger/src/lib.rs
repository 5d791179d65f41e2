//! Counterparty statement reconstruction engine.
//!
//! Merges the four independently stored transaction categories (sales
//! invoices, purchase invoices, receipts, disbursements) into one
//! chronological, running-balance account statement. The engine owns no
//! state and performs no I/O of its own; raw history arrives through the
//! [`RecordSource`] collaborator.

mod balance;
mod entry;
mod error;
mod merge;
mod normalize;
mod opening;
mod source;
mod statement;
mod summary;

pub use balance::apply_running_balance;
pub use entry::{EntryId, EntryKind, LedgerEntry, LineItemSummary};
pub use error::{LedgerError, LedgerResult};
pub use merge::{merge_window, statement_order};
pub use normalize::{normalize_payments, normalize_purchases, normalize_sales};
pub use opening::opening_balance;
pub use source::{MemoryRecordSource, RecordSource, SourceError, SourceResult};
pub use statement::{assemble, build_statement, Statement, StatementRequest};
pub use summary::{summarize, LedgerSummary};
