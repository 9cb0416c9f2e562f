//! Engine configuration.
//!
//! The only tunable is the pair of dictionary labels used to classify
//! categories that carry no explicit role. Labels are fixed for the lifetime
//! of a service and are never taken from a request.

use serde::{Deserialize, Serialize};

use crate::constants::{
    COLLECTION_CATEGORY_LABEL, COLLECTION_LABEL_ENV, ISSUANCE_CATEGORY_LABEL, ISSUANCE_LABEL_ENV,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLabels {
    pub issuance: String,
    pub collection: String,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        CategoryLabels {
            issuance: ISSUANCE_CATEGORY_LABEL.to_string(),
            collection: COLLECTION_CATEGORY_LABEL.to_string(),
        }
    }
}

impl CategoryLabels {
    pub fn new(issuance: impl Into<String>, collection: impl Into<String>) -> Self {
        CategoryLabels {
            issuance: issuance.into(),
            collection: collection.into(),
        }
    }

    /// Reads label overrides from the environment, falling back to the
    /// built-in labels when a variable is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CategoryLabels::default();
        let pick = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
        };
        CategoryLabels {
            issuance: pick(ISSUANCE_LABEL_ENV, defaults.issuance),
            collection: pick(COLLECTION_LABEL_ENV, defaults.collection),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingConfig {
    pub labels: CategoryLabels,
}

impl ReportingConfig {
    pub fn new(labels: CategoryLabels) -> Self {
        ReportingConfig { labels }
    }

    pub fn from_env() -> Self {
        ReportingConfig {
            labels: CategoryLabels::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_use_dictionary_labels() {
        let labels = CategoryLabels::default();
        assert_eq!(labels.issuance, "видача");
        assert_eq!(labels.collection, "збір");
    }

    #[test]
    fn lookup_overrides_only_non_blank_values() {
        let env: HashMap<&str, &str> = [
            (ISSUANCE_LABEL_ENV, "issuance"),
            (COLLECTION_LABEL_ENV, "   "),
        ]
        .into_iter()
        .collect();

        let labels = CategoryLabels::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(labels.issuance, "issuance");
        assert_eq!(labels.collection, COLLECTION_CATEGORY_LABEL);
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let labels = CategoryLabels::from_lookup(|_| None);
        assert_eq!(labels, CategoryLabels::default());
    }
}
