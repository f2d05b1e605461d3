//! Reference list store model.
//!
//! This module defines the [`ReferenceStore`], the flat category-to-list
//! mapping persisted as a JSON document and edited through the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free reference lists keyed by category name.
///
/// The store serializes transparently as the flat document it is persisted
/// as: `{ "destinations": [..], "project_managers": [..] }`. Values within a
/// category keep insertion order; adding an existing value is a no-op.
///
/// # Example
///
/// ```
/// use trip_expense_engine::models::ReferenceStore;
///
/// let mut store = ReferenceStore::new();
/// store.insert_category("destinations", vec!["서울".to_string()]);
/// assert!(store.add_value("destinations", "부산"));
/// assert!(!store.add_value("destinations", "부산"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceStore {
    categories: BTreeMap<String, Vec<String>>,
}

/// Per-category summary of the reference store contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Number of values in the category.
    pub count: usize,
    /// The values themselves, in stored order.
    pub items: Vec<String>,
}

impl ReferenceStore {
    /// Creates an empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a whole category.
    pub fn insert_category(&mut self, category: impl Into<String>, values: Vec<String>) {
        self.categories.insert(category.into(), values);
    }

    /// Returns the values of a category, if present.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Returns true if the category exists and contains the value.
    pub fn contains(&self, category: &str, value: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Appends a value to an existing category.
    ///
    /// Returns true if the store changed: the category must already exist
    /// and the value must not already be present.
    pub fn add_value(&mut self, category: &str, value: &str) -> bool {
        match self.categories.get_mut(category) {
            Some(values) if !values.iter().any(|v| v == value) => {
                values.push(value.to_string());
                true
            }
            _ => false,
        }
    }

    /// Removes a value from a category.
    ///
    /// Returns true if the value was present and removed.
    pub fn remove_value(&mut self, category: &str, value: &str) -> bool {
        match self.categories.get_mut(category) {
            Some(values) => match values.iter().position(|v| v == value) {
                Some(index) => {
                    values.remove(index);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Adds any category present in `defaults` but missing here.
    ///
    /// Existing categories are never overwritten, and no category is ever
    /// dropped; this is how documents written by older versions pick up
    /// newly introduced categories.
    pub fn backfill_from(&mut self, defaults: &ReferenceStore) {
        for (category, values) in &defaults.categories {
            self.categories
                .entry(category.clone())
                .or_insert_with(|| values.clone());
        }
    }

    /// Returns the category names in stored order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Returns a per-category summary of counts and values.
    pub fn summary(&self) -> BTreeMap<String, CategorySummary> {
        self.categories
            .iter()
            .map(|(category, values)| {
                (
                    category.clone(),
                    CategorySummary {
                        count: values.len(),
                        items: values.clone(),
                    },
                )
            })
            .collect()
    }
}

impl FromIterator<(String, Vec<String>)> for ReferenceStore {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}
