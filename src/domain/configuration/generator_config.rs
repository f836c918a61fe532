//! Generator configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::script::normalize_origin;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "exportgen.toml";

/// Origin used when neither the command line nor the config names one.
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Configuration loaded from `exportgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Script defaults.
    #[serde(default)]
    pub script: ScriptConfig,
    /// Resource defaults.
    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Defaults for the script header and authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Origin the generated script is attributed to.
    #[serde(default)]
    pub origin: Option<Url>,
    /// Default authentication mode name.
    #[serde(default)]
    pub authentication: Option<String>,
}

/// Resources checked when no selection is given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    #[serde(default)]
    pub selected: Vec<String>,
}

impl GeneratorConfig {
    /// Parse and validate configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(origin) = &self.script.origin {
            normalize_origin(origin.as_str()).map_err(|err| {
                AppError::config_error(format!("Invalid script.origin in config: {}", err))
            })?;
        }
        if let Some(mode) = &self.script.authentication
            && mode.trim().is_empty()
        {
            return Err(AppError::config_error("script.authentication must not be empty"));
        }
        if self.resources.selected.iter().any(|name| name.trim().is_empty()) {
            return Err(AppError::config_error("resources.selected must not contain empty names"));
        }
        Ok(())
    }

    /// Configured origin, reduced to `scheme://host[:port]`.
    pub fn origin(&self) -> Option<String> {
        self.script.origin.as_ref().and_then(|url| normalize_origin(url.as_str()).ok())
    }
}
