//! Reference data resolution and persistence.
//!
//! This module owns the persisted reference document, the optional secret
//! store, and the project name resolution chain. Every loader here resolves
//! through an ordered fallback sequence (secret store, local file, embedded
//! defaults) and never surfaces an error to its caller: a failed source is
//! logged and the chain continues.
//!
//! # Example
//!
//! ```no_run
//! use trip_expense_engine::store::{ReferenceRepository, SourcePaths};
//!
//! let sources = SourcePaths::from_dir(".");
//! let repository = ReferenceRepository::new(&sources.reference_data);
//! let store = repository.load();
//! println!("categories: {}", store.categories().count());
//! ```

pub mod defaults;
mod projects;
mod reference;
mod secrets;
mod sources;

pub use projects::load_project_names;
pub use reference::{ReferenceRepository, validate};
pub use secrets::SecretStore;
pub use sources::SourcePaths;
