use async_trait::async_trait;

use super::transactions_model::{CollectionEvent, IssuanceEvent};
use crate::errors::Result;
use crate::utils::DateRange;

/// Read access to recorded disbursements and payments.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Loans issued inside `date_range` (inclusive).
    async fn find_issuance(&self, date_range: DateRange) -> Result<Vec<IssuanceEvent>>;

    /// Payments received inside `date_range` (inclusive).
    async fn find_collections(&self, date_range: DateRange) -> Result<Vec<CollectionEvent>>;
}
