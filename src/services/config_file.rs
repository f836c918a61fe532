//! Configuration file loading.

use std::path::Path;

use crate::domain::AppError;
use crate::domain::configuration::GeneratorConfig;
use crate::domain::configuration::generator_config::CONFIG_FILE;

/// Load the generator configuration.
///
/// An explicit path must exist. Without one, `exportgen.toml` in `work_dir` is used when present
/// and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<GeneratorConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = work_dir.join(CONFIG_FILE);
            if !path.exists() {
                tracing::debug!("no {} in {}; using defaults", CONFIG_FILE, work_dir.display());
                return Ok(GeneratorConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let config = GeneratorConfig::parse_toml(&content)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
