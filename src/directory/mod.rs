//! Employee directory loading and lookups.
//!
//! The directory is a read-mostly in-memory table of employee pay
//! records, resolved once from the secret store, a legacy rate table, or
//! the embedded roster.
//!
//! # Example
//!
//! ```no_run
//! use trip_expense_engine::directory::EmployeeDirectory;
//! use trip_expense_engine::store::SourcePaths;
//!
//! let directory = EmployeeDirectory::load(&SourcePaths::from_dir("."));
//! println!("{} employees", directory.len());
//! ```

mod loader;

pub use loader::EmployeeDirectory;
