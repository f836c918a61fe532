//! Resource selection files.
//!
//! A selection file is a JSON or YAML list. Entries are either `{ name, checked }` records or
//! bare names, which count as checked:
//!
//! ```yaml
//! - AADUser
//! - name: AADGroup
//!   checked: false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, ResourceSelection};

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionEntry {
    Name(String),
    Record(ResourceSelection),
}

impl From<SelectionEntry> for ResourceSelection {
    fn from(entry: SelectionEntry) -> Self {
        match entry {
            SelectionEntry::Name(name) => ResourceSelection::checked(name),
            SelectionEntry::Record(record) => record,
        }
    }
}

enum SelectionFormat {
    Json,
    Yaml,
}

impl SelectionFormat {
    fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(SelectionFormat::Json),
            "yml" | "yaml" => Some(SelectionFormat::Yaml),
            _ => None,
        }
    }
}

/// Load a resource selection from a `.json`, `.yml`, or `.yaml` file.
pub fn load_selection(path: &Path) -> Result<Vec<ResourceSelection>, AppError> {
    let format = SelectionFormat::detect(path)
        .ok_or_else(|| AppError::UnsupportedSelectionFormat(path.display().to_string()))?;

    if !path.exists() {
        return Err(AppError::SelectionFileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let selection = parse_selection(&content, format).map_err(|details| AppError::ParseError {
        what: format!("selection file {}", path.display()),
        details,
    })?;

    tracing::debug!(
        path = %path.display(),
        entries = selection.len(),
        "loaded resource selection"
    );
    Ok(selection)
}

fn parse_selection(
    content: &str,
    format: SelectionFormat,
) -> Result<Vec<ResourceSelection>, String> {
    let entries: Vec<SelectionEntry> = match format {
        SelectionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        SelectionFormat::Yaml if content.trim().is_empty() => Vec::new(),
        SelectionFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
    };
    Ok(entries.into_iter().map(ResourceSelection::from).collect())
}
