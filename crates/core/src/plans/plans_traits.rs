use async_trait::async_trait;

use super::plans_model::PlanLine;
use crate::errors::Result;
use crate::utils::DateRange;

/// Read access to planned targets.
#[async_trait]
pub trait PlanRepositoryTrait: Send + Sync {
    /// Plans whose period falls inside `period_range` (inclusive).
    async fn find_plans(&self, period_range: DateRange) -> Result<Vec<PlanLine>>;
}
