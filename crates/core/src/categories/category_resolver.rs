use std::collections::HashMap;

use log::debug;

use super::categories_model::{Category, CategoryId, Role};
use super::categories_traits::CategoryRepositoryTrait;
use crate::config::CategoryLabels;
use crate::errors::Result;

#[derive(Debug, Clone)]
struct ResolvedCategory {
    name: String,
    role: Role,
}

/// Snapshot of the category dictionary with every entry's role resolved once.
///
/// Lookups are total: ids missing from the snapshot resolve to
/// [`Role::Unclassified`].
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    entries: HashMap<CategoryId, ResolvedCategory>,
}

impl CategoryResolver {
    pub fn new(categories: Vec<Category>, labels: &CategoryLabels) -> Self {
        let entries = categories
            .into_iter()
            .map(|category| {
                let role = category
                    .role
                    .unwrap_or_else(|| Self::role_for_name(&category.name, labels));
                (
                    category.id,
                    ResolvedCategory {
                        name: category.name,
                        role,
                    },
                )
            })
            .collect();
        CategoryResolver { entries }
    }

    /// Loads the dictionary from the repository and resolves it.
    pub async fn load(
        repository: &dyn CategoryRepositoryTrait,
        labels: &CategoryLabels,
    ) -> Result<Self> {
        let categories = repository.list_categories().await?;
        debug!("Resolving roles for {} categories", categories.len());
        Ok(Self::new(categories, labels))
    }

    /// Exact label match; no trimming or case folding.
    pub fn role_for_name(name: &str, labels: &CategoryLabels) -> Role {
        if name == labels.issuance {
            Role::Issuance
        } else if name == labels.collection {
            Role::Collection
        } else {
            Role::Unclassified
        }
    }

    pub fn resolve(&self, category_id: CategoryId) -> Role {
        self.entries
            .get(&category_id)
            .map(|entry| entry.role)
            .unwrap_or(Role::Unclassified)
    }

    pub fn name_of(&self, category_id: CategoryId) -> String {
        self.entries
            .get(&category_id)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| format!("category #{}", category_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
