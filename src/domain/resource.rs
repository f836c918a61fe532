//! Resource selection model.

use serde::{Deserialize, Serialize};

/// An exportable resource together with its inclusion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSelection {
    /// Resource name as understood by the export command (e.g. `AADUser`).
    pub name: String,
    /// Whether the resource is included in the export.
    #[serde(default = "default_checked")]
    pub checked: bool,
}

impl ResourceSelection {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self { name: name.into(), checked }
    }

    /// A resource that is included in the export.
    pub fn checked(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

fn default_checked() -> bool {
    true
}

/// Names of the checked resources, in input order.
pub fn checked_names(resources: &[ResourceSelection]) -> Vec<&str> {
    resources.iter().filter(|r| r.checked).map(|r| r.name.as_str()).collect()
}
