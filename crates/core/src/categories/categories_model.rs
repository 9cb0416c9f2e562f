//! Category dictionary models.

use serde::{Deserialize, Serialize};

/// Identifier of a dictionary entry.
pub type CategoryId = i32;

/// Semantic role of a category in plan-vs-actual reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Plans loan disbursements.
    Issuance,
    /// Plans payments received.
    Collection,
    /// Anything else; always reconciled against zero actuals.
    #[default]
    Unclassified,
}

/// Domain model representing a dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Explicit role. When present it wins over label matching on `name`.
    pub role: Option<Role>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Category {
            id,
            name: name.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}
