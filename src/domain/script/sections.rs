//! Section builders for the generated export script.

use chrono::NaiveDateTime;

use crate::domain::authentication::{AuthenticationMode, ModeSelection};
use crate::domain::resource::{ResourceSelection, checked_names};

const PROJECT_URL: &str = "https://microsoft365dsc.com";
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const EXPORT_COMMAND: &str = "Export-M365DSCConfiguration -Quiet -ComponentsToExtract";

pub(super) fn header(origin: &str, now: NaiveDateTime) -> String {
    format!(
        "# Generated by Microsoft365DSC from {} on {}\n# Visit {} for more information\n\n",
        origin,
        now.format(TIMESTAMP_FORMAT),
        PROJECT_URL
    )
}

pub(super) fn prompts(mode: &ModeSelection) -> String {
    let lines: &[&str] = match mode {
        ModeSelection::Recognized(AuthenticationMode::Credentials) => {
            &["# Getting client credentials", "$creds = Get-Credential"]
        }
        ModeSelection::Recognized(AuthenticationMode::Application) => &[
            "# Getting application information for Application + Secret authentication",
            "$ApplicationId = Read-Host -Prompt 'Application Id'",
            "$ApplicationSecret = Read-Host -Prompt 'Application Secret'",
            "$TenantId = Read-Host -Prompt 'Tenant Id'",
        ],
        ModeSelection::Recognized(AuthenticationMode::Certificate) => &[
            "# Getting application information for Application + Certificate authentication",
            "$ApplicationId = Read-Host -Prompt 'Application Id'",
            "$CertificateThumbprint = Read-Host -Prompt 'Certificate Thumbprint'",
            "$TenantId = Read-Host -Prompt 'Tenant Id'",
        ],
        ModeSelection::Unrecognized(_) => &[],
    };

    let mut block: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    block.push('\n');
    block
}

pub(super) fn resource_export(resources: &[ResourceSelection]) -> String {
    let names = checked_names(resources).join("\", \"");
    format!("# Exporting resources\n{} @(\"{}\")", EXPORT_COMMAND, names)
}

pub(super) fn authentication_args(mode: &ModeSelection) -> &'static str {
    match mode {
        ModeSelection::Recognized(AuthenticationMode::Credentials) => " -GlobalAdminAccount $creds",
        ModeSelection::Recognized(AuthenticationMode::Application) => {
            " -ApplicationId $ApplicationId -ApplicationSecret $ApplicationSecret -TenantId $TenantId"
        }
        ModeSelection::Recognized(AuthenticationMode::Certificate) => {
            " -ApplicationId $ApplicationId -CertificateThumbprint $CertificateThumbprint -TenantId $TenantId"
        }
        ModeSelection::Unrecognized(_) => "",
    }
}
