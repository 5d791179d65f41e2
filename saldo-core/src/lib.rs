//! Domain types shared across the saldo workspace.

mod ids;
mod money;
mod period;
mod records;

pub use ids::{BusinessId, CounterpartyId, RecordId};
pub use money::{amount_from_decimal, format_amount, parse_amount, Amount, AmountError};
pub use period::{Period, PeriodError};
pub use records::{
    CounterpartyProfile, LineItem, PaymentKind, RawPaymentRecord, RawPurchaseRecord,
    RawSalesRecord,
};
