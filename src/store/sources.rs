//! File locations for the external data sources.

use std::path::{Path, PathBuf};

/// Paths to every external data source the engine resolves from.
///
/// All paths are optional at runtime: a missing file simply drops that
/// stage from its resolution chain. Owning the paths in one value keeps
/// the loaders free of global state and makes tests trivial to isolate
/// in a temporary directory.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    /// The optional secret store document (YAML mapping).
    pub secrets: PathBuf,
    /// The persisted reference list document (JSON).
    pub reference_data: PathBuf,
    /// The legacy per-position rate table (EUC-KR encoded CSV).
    pub employee_rates: PathBuf,
    /// The project name list (UTF-8 CSV, first column).
    pub project_names: PathBuf,
}

impl SourcePaths {
    /// Builds the conventional source layout rooted at `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            secrets: dir.join("secrets.yaml"),
            reference_data: dir.join("business_trip_data.json"),
            employee_rates: dir.join("employee_rates.csv"),
            project_names: dir.join("project_names.csv"),
        }
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self::from_dir(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_joins_conventional_names() {
        let sources = SourcePaths::from_dir("/data");
        assert_eq!(sources.secrets, PathBuf::from("/data/secrets.yaml"));
        assert_eq!(
            sources.reference_data,
            PathBuf::from("/data/business_trip_data.json")
        );
        assert_eq!(
            sources.employee_rates,
            PathBuf::from("/data/employee_rates.csv")
        );
        assert_eq!(
            sources.project_names,
            PathBuf::from("/data/project_names.csv")
        );
    }

    #[test]
    fn test_default_roots_at_working_directory() {
        let sources = SourcePaths::default();
        assert_eq!(sources.reference_data, PathBuf::from("./business_trip_data.json"));
    }
}
