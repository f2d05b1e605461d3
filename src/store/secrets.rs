//! Optional secret store document.
//!
//! The secret store is an externally provisioned YAML mapping that, when
//! present, takes priority over local files in every resolution chain. It
//! is read-only from this system's perspective.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{EmployeeRecord, parse_rate};

/// Key holding the research project name list.
pub const KEY_PROJECT_NAMES: &str = "project_names";

/// Key holding the per-employee allowance mapping.
pub const KEY_EMPLOYEE_ALLOWANCES: &str = "employee_allowances";

/// A loaded secret store document.
#[derive(Debug, Clone)]
pub struct SecretStore {
    path: String,
    values: Mapping,
}

impl SecretStore {
    /// Loads the secret store if the document is present.
    ///
    /// Returns `Ok(None)` when the file does not exist (the store is
    /// simply unavailable), and an error when it exists but cannot be
    /// read or is not a YAML mapping.
    pub fn load(path: &Path) -> ExpenseResult<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "no secret store present");
            return Ok(None);
        }

        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|_| ExpenseError::SourceUnavailable {
            path: display.clone(),
        })?;
        let value: Value =
            serde_yaml::from_str(&content).map_err(|e| ExpenseError::SourceParse {
                path: display.clone(),
                message: e.to_string(),
            })?;

        match value {
            Value::Mapping(values) => Ok(Some(Self {
                path: display,
                values,
            })),
            _ => Err(ExpenseError::SourceParse {
                path: display,
                message: "expected a mapping at the top level".to_string(),
            }),
        }
    }

    /// Returns true if the store carries the given top-level key.
    pub fn contains_key(&self, key: &str) -> bool {
        lookup(&self.values, key).is_some()
    }

    /// Extracts the project name list, if the store carries one.
    ///
    /// The exact `project_names` key is tried first. If it is absent, any
    /// key containing `project` (case-insensitive) that holds a string
    /// sequence is accepted. This is tolerance for legacy provisioning,
    /// not a lookup feature; do not extend it.
    pub fn project_names(&self) -> ExpenseResult<Option<Vec<String>>> {
        if let Some(value) = lookup(&self.values, KEY_PROJECT_NAMES) {
            let names = string_sequence(value).ok_or_else(|| ExpenseError::SourceParse {
                path: self.path.clone(),
                message: format!("'{}' is not a sequence of strings", KEY_PROJECT_NAMES),
            })?;
            return Ok(Some(names));
        }

        for (key, value) in &self.values {
            let Some(key) = key.as_str() else { continue };
            if key.to_lowercase().contains("project") {
                if let Some(names) = string_sequence(value) {
                    debug!(key, "using fuzzy-matched project name key");
                    return Ok(Some(names));
                }
            }
        }

        Ok(None)
    }

    /// Extracts the employee allowance records, if the store carries them.
    ///
    /// Entries map an employee name to `{position, daily, meal}`, with
    /// rates as integer strings that may carry thousands separators.
    /// Returns `Ok(None)` when the key is absent; a present but malformed
    /// entry is an error, which callers treat as a failed source.
    pub fn employee_allowances(&self) -> ExpenseResult<Option<Vec<EmployeeRecord>>> {
        let Some(value) = lookup(&self.values, KEY_EMPLOYEE_ALLOWANCES) else {
            return Ok(None);
        };

        let entries = value.as_mapping().ok_or_else(|| ExpenseError::SourceParse {
            path: self.path.clone(),
            message: format!("'{}' is not a mapping", KEY_EMPLOYEE_ALLOWANCES),
        })?;

        let mut records = Vec::with_capacity(entries.len());
        for (name, info) in entries {
            let name = name.as_str().ok_or_else(|| self.malformed_entry("employee name"))?;
            let info = info
                .as_mapping()
                .ok_or_else(|| self.malformed_entry(name))?;

            let position = self.string_field(info, name, "position")?;
            let daily = parse_rate("daily", self.string_field(info, name, "daily")?)?;
            let meal = parse_rate("meal", self.string_field(info, name, "meal")?)?;

            records.push(EmployeeRecord {
                name: name.to_string(),
                position: position.to_string(),
                daily_allowance: daily,
                meal_allowance: meal,
            });
        }

        Ok(Some(records))
    }

    fn string_field<'a>(
        &self,
        entry: &'a Mapping,
        name: &str,
        field: &str,
    ) -> ExpenseResult<&'a str> {
        lookup(entry, field)
            .and_then(Value::as_str)
            .ok_or_else(|| ExpenseError::SourceParse {
                path: self.path.clone(),
                message: format!(
                    "allowance entry '{}' is missing string field '{}'",
                    name, field
                ),
            })
    }

    fn malformed_entry(&self, detail: &str) -> ExpenseError {
        ExpenseError::SourceParse {
            path: self.path.clone(),
            message: format!("malformed allowance entry: {}", detail),
        }
    }
}

fn lookup<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping
        .iter()
        .find_map(|(k, v)| (k.as_str() == Some(key)).then_some(v))
}

fn string_sequence(value: &Value) -> Option<Vec<String>> {
    let sequence = value.as_sequence()?;
    let mut items = Vec::with_capacity(sequence.len());
    for item in sequence {
        items.push(item.as_str()?.to_string());
    }
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_secrets(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("secrets.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let result = SecretStore::load(&dir.path().join("secrets.yaml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_secrets(&dir, "key: [unclosed");
        assert!(SecretStore::load(&path).is_err());
    }

    #[test]
    fn test_non_mapping_document_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_secrets(&dir, "- just\n- a\n- list\n");
        assert!(SecretStore::load(&path).is_err());
    }

    #[test]
    fn test_project_names_exact_key() {
        let dir = tempdir().unwrap();
        let path = write_secrets(
            &dir,
            "project_names:\n  - 연구과제 하나\n  - 연구과제 둘\n",
        );

        let store = SecretStore::load(&path).unwrap().unwrap();
        let names = store.project_names().unwrap().unwrap();
        assert_eq!(names, vec!["연구과제 하나", "연구과제 둘"]);
    }

    #[test]
    fn test_project_names_fuzzy_key_match() {
        let dir = tempdir().unwrap();
        let path = write_secrets(
            &dir,
            "Project_Name_List:\n  - 연구과제 하나\n",
        );

        let store = SecretStore::load(&path).unwrap().unwrap();
        let names = store.project_names().unwrap().unwrap();
        assert_eq!(names, vec!["연구과제 하나"]);
    }

    #[test]
    fn test_project_names_absent_key() {
        let dir = tempdir().unwrap();
        let path = write_secrets(&dir, "something_else: [1, 2]\n");

        let store = SecretStore::load(&path).unwrap().unwrap();
        assert!(store.project_names().unwrap().is_none());
    }

    #[test]
    fn test_project_names_exact_key_wrong_shape_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_secrets(&dir, "project_names: not-a-list\n");

        let store = SecretStore::load(&path).unwrap().unwrap();
        assert!(store.project_names().is_err());
    }

    #[test]
    fn test_employee_allowances_parsed_with_separators() {
        let dir = tempdir().unwrap();
        let path = write_secrets(
            &dir,
            concat!(
                "employee_allowances:\n",
                "  이정석:\n",
                "    position: 대표이사\n",
                "    daily: \"55,000\"\n",
                "    meal: \"60,000\"\n",
                "  배지현:\n",
                "    position: 과장\n",
                "    daily: \"40,000\"\n",
                "    meal: \"45,000\"\n",
            ),
        );

        let store = SecretStore::load(&path).unwrap().unwrap();
        let records = store.employee_allowances().unwrap().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "이정석");
        assert_eq!(records[0].position, "대표이사");
        assert_eq!(records[0].daily_allowance, Decimal::from(55000));
        assert_eq!(records[1].meal_allowance, Decimal::from(45000));
    }

    #[test]
    fn test_employee_allowances_absent_key() {
        let dir = tempdir().unwrap();
        let path = write_secrets(&dir, "project_names: []\n");

        let store = SecretStore::load(&path).unwrap().unwrap();
        assert!(store.employee_allowances().unwrap().is_none());
    }

    #[test]
    fn test_employee_allowances_missing_field_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_secrets(
            &dir,
            concat!(
                "employee_allowances:\n",
                "  이정석:\n",
                "    position: 대표이사\n",
                "    daily: \"55,000\"\n",
            ),
        );

        let store = SecretStore::load(&path).unwrap().unwrap();
        let result = store.employee_allowances();
        match result {
            Err(ExpenseError::SourceParse { message, .. }) => {
                assert!(message.contains("meal"));
            }
            other => panic!("Expected SourceParse, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_allowances_bad_rate_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_secrets(
            &dir,
            concat!(
                "employee_allowances:\n",
                "  이정석:\n",
                "    position: 대표이사\n",
                "    daily: \"많이\"\n",
                "    meal: \"60,000\"\n",
            ),
        );

        let store = SecretStore::load(&path).unwrap().unwrap();
        assert!(matches!(
            store.employee_allowances(),
            Err(ExpenseError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_contains_key() {
        let dir = tempdir().unwrap();
        let path = write_secrets(&dir, "employee_allowances: {}\n");

        let store = SecretStore::load(&path).unwrap().unwrap();
        assert!(store.contains_key(KEY_EMPLOYEE_ALLOWANCES));
        assert!(!store.contains_key(KEY_PROJECT_NAMES));
    }
}
