//! Application state for the Trip Expense Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::directory::EmployeeDirectory;
use crate::store::{ReferenceRepository, SourcePaths, load_project_names};

/// Shared application state.
///
/// The directory and project name list are resolved once at construction
/// and swapped atomically on reload; the reference repository is
/// stateless, every request reads the persisted document directly.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    sources: SourcePaths,
    references: ReferenceRepository,
    directory: ArcSwap<EmployeeDirectory>,
    project_names: ArcSwap<Vec<String>>,
}

impl AppState {
    /// Creates the application state, resolving all data sources.
    pub fn new(sources: SourcePaths) -> Self {
        let references = ReferenceRepository::new(&sources.reference_data);
        let directory = EmployeeDirectory::load(&sources);
        let project_names = load_project_names(&sources);

        Self {
            inner: Arc::new(StateInner {
                references,
                directory: ArcSwap::from_pointee(directory),
                project_names: ArcSwap::from_pointee(project_names),
                sources,
            }),
        }
    }

    /// Returns the reference list repository.
    pub fn references(&self) -> &ReferenceRepository {
        &self.inner.references
    }

    /// Returns the current employee directory.
    pub fn directory(&self) -> Arc<EmployeeDirectory> {
        self.inner.directory.load_full()
    }

    /// Returns the current project name list.
    pub fn project_names(&self) -> Arc<Vec<String>> {
        self.inner.project_names.load_full()
    }

    /// Re-resolves the directory and project names from their sources.
    ///
    /// Returns the new (employee, project name) counts. In-flight
    /// requests keep the snapshot they already loaded.
    pub fn reload(&self) -> (usize, usize) {
        let directory = EmployeeDirectory::load(&self.inner.sources);
        let project_names = load_project_names(&self.inner.sources);
        let counts = (directory.len(), project_names.len());

        self.inner.directory.store(Arc::new(directory));
        self.inner.project_names.store(Arc::new(project_names));
        counts
    }
}
