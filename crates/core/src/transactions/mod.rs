//! Transactions module - issuance and collection events.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::{CollectionEvent, DatedAmount, IssuanceEvent};
pub use transactions_traits::TransactionRepositoryTrait;
