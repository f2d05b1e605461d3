//! Employee directory resolution.
//!
//! Resolves employee pay records from, in priority order: the secret
//! store's `employee_allowances` key, the legacy EUC-KR rate table, or
//! the embedded roster. Any failure at any stage falls through to the
//! embedded roster; loading never fails.

use std::fs;
use std::path::Path;

use encoding_rs::EUC_KR;
use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{EmployeeRecord, parse_rate};
use crate::store::{SecretStore, SourcePaths, defaults};

// Column headers of the legacy rate table.
const COLUMN_NAME: &str = "이름";
const COLUMN_POSITION: &str = "직급";
const COLUMN_DAILY: &str = "일비";
const COLUMN_MEAL: &str = "식비";

/// The in-memory employee directory.
///
/// Loaded once per process and treated as immutable; callers needing
/// fresh data construct a new directory via [`EmployeeDirectory::load`]
/// and swap it in.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<EmployeeRecord>,
}

impl EmployeeDirectory {
    /// Resolves the directory from the configured sources.
    ///
    /// A malformed source does not continue down the chain: it falls
    /// straight to the embedded roster, keeping partial reads of a
    /// half-provisioned source from masquerading as the full table.
    pub fn load(sources: &SourcePaths) -> Self {
        let employees = match Self::resolve(sources) {
            Ok(Some(employees)) => {
                info!(count = employees.len(), "loaded employee directory");
                employees
            }
            Ok(None) => {
                info!("no employee data source available, using embedded roster");
                defaults::employee_roster()
            }
            Err(err) => {
                warn!(error = %err, "employee data load failed, using embedded roster");
                defaults::employee_roster()
            }
        };
        Self { employees }
    }

    fn resolve(sources: &SourcePaths) -> ExpenseResult<Option<Vec<EmployeeRecord>>> {
        if let Some(secrets) = SecretStore::load(&sources.secrets)? {
            if let Some(records) = secrets.employee_allowances()? {
                return Ok(Some(records));
            }
        }

        if sources.employee_rates.exists() {
            return load_rate_table(&sources.employee_rates).map(Some);
        }

        Ok(None)
    }

    /// Builds a directory directly from records.
    pub fn from_records(employees: Vec<EmployeeRecord>) -> Self {
        Self { employees }
    }

    /// Returns all employee names in directory order.
    pub fn names(&self) -> Vec<String> {
        self.employees.iter().map(|e| e.name.clone()).collect()
    }

    /// Looks up an employee by exact name match.
    pub fn get(&self, name: &str) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Returns all records in directory order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Returns the number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Reads the legacy rate table: EUC-KR encoded CSV with Korean headers.
///
/// Headers and cells are trimmed of surrounding whitespace; rate cells
/// are stripped of thousands separators and spaces before the integer
/// conversion.
fn load_rate_table(path: &Path) -> ExpenseResult<Vec<EmployeeRecord>> {
    let display = path.display().to_string();
    let raw = fs::read(path).map_err(|_| ExpenseError::SourceUnavailable {
        path: display.clone(),
    })?;

    let (decoded, _, had_errors) = EUC_KR.decode(&raw);
    if had_errors {
        return Err(ExpenseError::SourceParse {
            path: display,
            message: "invalid EUC-KR byte sequence".to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ExpenseError::SourceParse {
            path: display.clone(),
            message: e.to_string(),
        })?
        .clone();
    let column = |name: &str| -> ExpenseResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ExpenseError::MissingColumn {
                path: display.clone(),
                column: name.to_string(),
            })
    };
    let name_column = column(COLUMN_NAME)?;
    let position_column = column(COLUMN_POSITION)?;
    let daily_column = column(COLUMN_DAILY)?;
    let meal_column = column(COLUMN_MEAL)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ExpenseError::SourceParse {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let cell = |index: usize| record.get(index).unwrap_or("");

        let name = cell(name_column);
        if name.is_empty() {
            continue;
        }

        records.push(EmployeeRecord {
            name: name.to_string(),
            position: cell(position_column).to_string(),
            daily_allowance: parse_rate(COLUMN_DAILY, cell(daily_column))?,
            meal_allowance: parse_rate(COLUMN_MEAL, cell(meal_column))?,
        });
    }

    Ok(records)
}
