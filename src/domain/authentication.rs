use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported ways of authenticating the exported session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthenticationMode {
    /// Interactive credentials prompted with `Get-Credential`.
    Credentials,
    /// Application id + application secret.
    Application,
    /// Application id + certificate thumbprint.
    Certificate,
}

impl AuthenticationMode {
    /// All modes in presentation order.
    pub const ALL: [AuthenticationMode; 3] = [
        AuthenticationMode::Credentials,
        AuthenticationMode::Application,
        AuthenticationMode::Certificate,
    ];

    /// Canonical name, as accepted on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            AuthenticationMode::Credentials => "Credentials",
            AuthenticationMode::Application => "Application",
            AuthenticationMode::Certificate => "Certificate",
        }
    }

    /// Parse a mode from its name or a short alias. Case-insensitive.
    pub fn from_name(name: &str) -> Option<AuthenticationMode> {
        match name.trim().to_lowercase().as_str() {
            "credentials" | "credential" | "creds" => Some(AuthenticationMode::Credentials),
            "application" | "app" | "secret" => Some(AuthenticationMode::Application),
            "certificate" | "cert" => Some(AuthenticationMode::Certificate),
            _ => None,
        }
    }

    /// Human-readable description of this mode.
    pub fn description(&self) -> &'static str {
        match self {
            AuthenticationMode::Credentials => "Interactive user credentials",
            AuthenticationMode::Application => "Application Id + Application Secret",
            AuthenticationMode::Certificate => "Application Id + Certificate Thumbprint",
        }
    }

    /// Script variables this mode prompts for and passes to the export command.
    pub fn variables(&self) -> &'static [&'static str] {
        match self {
            AuthenticationMode::Credentials => &["$creds"],
            AuthenticationMode::Application => {
                &["$ApplicationId", "$ApplicationSecret", "$TenantId"]
            }
            AuthenticationMode::Certificate => {
                &["$ApplicationId", "$CertificateThumbprint", "$TenantId"]
            }
        }
    }
}

impl fmt::Display for AuthenticationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Authentication mode as received from the caller.
///
/// Selection state is maintained outside the generator, so the value handed in may not name any
/// supported mode. Such values are carried verbatim and render as an empty prompt block and an
/// empty argument fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModeSelection {
    Recognized(AuthenticationMode),
    Unrecognized(String),
}

impl ModeSelection {
    /// Classify a raw mode value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match AuthenticationMode::from_name(raw) {
            Some(mode) => ModeSelection::Recognized(mode),
            None => ModeSelection::Unrecognized(raw.to_string()),
        }
    }

    pub fn mode(&self) -> Option<AuthenticationMode> {
        match self {
            ModeSelection::Recognized(mode) => Some(*mode),
            ModeSelection::Unrecognized(_) => None,
        }
    }
}

impl From<AuthenticationMode> for ModeSelection {
    fn from(mode: AuthenticationMode) -> Self {
        ModeSelection::Recognized(mode)
    }
}

impl fmt::Display for ModeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSelection::Recognized(mode) => write!(f, "{}", mode),
            ModeSelection::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}
