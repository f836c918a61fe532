use std::io;

use thiserror::Error;

/// Library-wide error type for exportgen operations.
///
/// Script assembly itself never fails; these errors come from loading inputs, reading
/// configuration, and delivering the generated script.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration content is invalid.
    #[error("{0}")]
    Configuration(String),

    /// An explicitly requested configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Selection file not found at path.
    #[error("Selection file not found: {0}")]
    SelectionFileNotFound(String),

    /// Selection file extension is not supported.
    #[error("Unsupported selection file '{0}': expected .json, .yml, or .yaml")]
    UnsupportedSelectionFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Origin is not an absolute URL with a host.
    #[error("Invalid origin '{value}': {reason}")]
    InvalidOrigin { value: String, reason: String },

    /// Authentication mode not recognized while running in strict mode.
    #[error(
        "Unknown authentication mode '{0}': must be one of Credentials, Application, Certificate"
    )]
    UnknownAuthenticationMode(String),

    /// Clipboard access or write failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::UnsupportedSelectionFormat(_)
            | AppError::ParseError { .. }
            | AppError::InvalidOrigin { .. }
            | AppError::UnknownAuthenticationMode(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) | AppError::SelectionFileNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::ClipboardError(_) | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_map_to_not_found() {
        assert_eq!(AppError::ConfigNotFound("x".into()).kind(), io::ErrorKind::NotFound);
        assert_eq!(AppError::SelectionFileNotFound("x".into()).kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn invalid_values_map_to_invalid_input() {
        let err = AppError::InvalidOrigin { value: "x".into(), reason: "relative".into() };
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Invalid origin 'x': relative");
    }
}
