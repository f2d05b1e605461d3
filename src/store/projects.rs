//! Research project name resolution.
//!
//! Project names are read-only from the calculator's perspective and are
//! sourced independently of the reference list document, through the
//! usual chain: secret store, local CSV, embedded list.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};

use super::defaults;
use super::secrets::SecretStore;
use super::sources::SourcePaths;

/// Resolves the research project name list.
///
/// Tries, in order: the secret store's `project_names` key (with a fuzzy
/// key fallback for legacy provisioning), the first column of the local
/// CSV with blank cells dropped, and finally the embedded list. Never
/// fails; a broken source is logged and the embedded list is used.
pub fn load_project_names(sources: &SourcePaths) -> Vec<String> {
    match resolve_project_names(sources) {
        Ok(Some(names)) => {
            info!(count = names.len(), "loaded project names");
            names
        }
        Ok(None) => {
            info!("no project name source available, using embedded list");
            defaults::project_names()
        }
        Err(err) => {
            warn!(error = %err, "project name load failed, using embedded list");
            defaults::project_names()
        }
    }
}

fn resolve_project_names(sources: &SourcePaths) -> ExpenseResult<Option<Vec<String>>> {
    if let Some(secrets) = SecretStore::load(&sources.secrets)? {
        if let Some(names) = secrets.project_names()? {
            return Ok(Some(names));
        }
    }

    if sources.project_names.exists() {
        return load_project_csv(&sources.project_names).map(Some);
    }

    Ok(None)
}

/// Reads the first column of the project name CSV, dropping blank cells.
fn load_project_csv(path: &Path) -> ExpenseResult<Vec<String>> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|_| ExpenseError::SourceUnavailable {
        path: display.clone(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExpenseError::SourceParse {
            path: display.clone(),
            message: e.to_string(),
        })?;
        if let Some(first) = record.get(0) {
            if !first.is_empty() {
                names.push(first.to_string());
            }
        }
    }

    Ok(names)
}
