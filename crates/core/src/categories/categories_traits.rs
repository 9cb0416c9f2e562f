use async_trait::async_trait;

use super::categories_model::{Category, CategoryId};
use crate::errors::Result;

/// Read access to the category dictionary.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Display name of a dictionary entry, `None` when the id is unknown.
    async fn resolve_category_name(&self, category_id: CategoryId) -> Result<Option<String>> {
        let categories = self.list_categories().await?;
        Ok(categories
            .into_iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name))
    }
}
