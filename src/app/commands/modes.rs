//! Modes command - lists the supported authentication modes.

use crate::domain::AuthenticationMode;

/// Summary of an authentication mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSummary {
    pub name: String,
    pub description: String,
    /// Script variables the mode prompts for.
    pub variables: Vec<String>,
}

impl From<AuthenticationMode> for ModeSummary {
    fn from(mode: AuthenticationMode) -> Self {
        Self {
            name: mode.name().to_string(),
            description: mode.description().to_string(),
            variables: mode.variables().iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// List all supported authentication modes in presentation order.
pub fn list() -> Vec<ModeSummary> {
    AuthenticationMode::ALL.into_iter().map(ModeSummary::from).collect()
}
