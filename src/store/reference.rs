//! Persistence for the reference list document.
//!
//! This module provides the [`ReferenceRepository`] type, which owns the
//! path of the persisted JSON document and implements whole-document
//! load/save plus the add/remove/reset mutations used by the form API.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ReferenceStore;

use super::defaults;

/// Loads, saves, and mutates the persisted reference list document.
///
/// The repository is stateless between calls: every operation reads the
/// whole document and writes it back wholesale, so there is no cached view
/// to keep coherent and no partial-write scenario to resolve.
///
/// Loading never fails. A missing document is initialized from the
/// embedded defaults; an unreadable or malformed one falls back to the
/// defaults for the current call (the broken file is left in place for
/// manual inspection).
#[derive(Debug, Clone)]
pub struct ReferenceRepository {
    path: PathBuf,
}

impl ReferenceRepository {
    /// Creates a repository persisting to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the reference store.
    ///
    /// Missing categories are backfilled from the embedded defaults
    /// without overwriting what the document already carries. Categories
    /// unknown to the defaults are kept as-is.
    pub fn load(&self) -> ReferenceStore {
        match self.try_load() {
            Ok(store) => store,
            Err(err) => {
                warn!(error = %err, "reference data load failed, using embedded defaults");
                defaults::reference_store()
            }
        }
    }

    fn try_load(&self) -> ExpenseResult<ReferenceStore> {
        if !self.path.exists() {
            let store = defaults::reference_store();
            if let Err(err) = self.save(&store) {
                warn!(error = %err, "failed to persist initial reference data");
            } else {
                info!(path = %self.path.display(), "initialized reference data with defaults");
            }
            return Ok(store);
        }

        let display = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|_| {
            ExpenseError::SourceUnavailable {
                path: display.clone(),
            }
        })?;
        let mut store: ReferenceStore =
            serde_json::from_str(&content).map_err(|e| ExpenseError::SourceParse {
                path: display,
                message: e.to_string(),
            })?;
        store.backfill_from(&defaults::reference_store());
        Ok(store)
    }

    /// Persists the full document, pretty-printed for manual edits.
    pub fn save(&self, store: &ReferenceStore) -> ExpenseResult<()> {
        let display = self.path.display().to_string();
        let mut content =
            serde_json::to_string_pretty(store).map_err(|e| ExpenseError::StorePersist {
                path: display.clone(),
                message: e.to_string(),
            })?;
        content.push('\n');
        fs::write(&self.path, content).map_err(|e| ExpenseError::StorePersist {
            path: display,
            message: e.to_string(),
        })
    }

    /// Loads the document, appends a value, and persists.
    ///
    /// Returns whether a change occurred. Duplicates and unknown
    /// categories are no-ops; a failed persist is logged but the change
    /// is still reported, matching the in-memory state handed back by
    /// subsequent loads of an intact document.
    pub fn add_value(&self, category: &str, value: &str) -> bool {
        let mut store = self.load();
        self.add_value_in(&mut store, category, value)
    }

    /// Appends a value to a caller-held store and persists on change.
    pub fn add_value_in(&self, store: &mut ReferenceStore, category: &str, value: &str) -> bool {
        let changed = store.add_value(category, value);
        if changed {
            self.persist_logged(store);
        }
        changed
    }

    /// Loads the document, removes a value, and persists.
    ///
    /// Returns whether a change occurred.
    pub fn remove_value(&self, category: &str, value: &str) -> bool {
        let mut store = self.load();
        self.remove_value_in(&mut store, category, value)
    }

    /// Removes a value from a caller-held store and persists on change.
    pub fn remove_value_in(&self, store: &mut ReferenceStore, category: &str, value: &str) -> bool {
        let changed = store.remove_value(category, value);
        if changed {
            self.persist_logged(store);
        }
        changed
    }

    /// Overwrites the document with the embedded defaults.
    ///
    /// Returns the fresh defaults. Any upstream cached view of the data
    /// is stale after this call and must be refreshed by its owner.
    pub fn reset_to_defaults(&self) -> ReferenceStore {
        let store = defaults::reference_store();
        self.persist_logged(&store);
        info!("reference data reset to defaults");
        store
    }

    fn persist_logged(&self, store: &ReferenceStore) {
        if let Err(err) = self.save(store) {
            warn!(error = %err, "failed to persist reference data");
        }
    }
}

/// Checks that every required category is present and non-empty.
///
/// Returns `Ok(())` for a usable store, or a
/// [`ExpenseError::ValidationFailed`] carrying a human-readable message.
/// A category of the wrong shape cannot occur here: a malformed document
/// already fails deserialization during [`ReferenceRepository::load`] and
/// falls back to the defaults.
pub fn validate(store: &ReferenceStore) -> ExpenseResult<()> {
    for category in defaults::REQUIRED_CATEGORIES {
        match store.get(category) {
            None => {
                return Err(ExpenseError::ValidationFailed {
                    message: format!("required category '{}' is missing", category),
                });
            }
            Some(values) if values.is_empty() => {
                return Err(ExpenseError::ValidationFailed {
                    message: format!("category '{}' must have at least one value", category),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
