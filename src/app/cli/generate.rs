//! Generate command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, MultiSelect, Select};

use crate::app::api::{GenerateOptions, GenerateOutcome, GenerationRequest};
use crate::domain::{AppError, AuthenticationMode, ModeSelection, ResourceSelection};

const COPIED_NOTICE: &str = "✅ Copied!";

#[derive(Args)]
pub struct GenerateArgs {
    /// Authentication mode: Credentials, Application, or Certificate
    #[arg(short, long = "auth", value_name = "MODE")]
    authentication: Option<String>,
    /// Resource to export (repeatable)
    #[arg(short, long = "resource", value_name = "NAME")]
    resources: Vec<String>,
    /// JSON or YAML file listing resources with their checked state
    #[arg(short, long = "selection", value_name = "FILE")]
    selection_file: Option<PathBuf>,
    /// Origin the script is attributed to (defaults to http://localhost)
    #[arg(long, value_name = "URL")]
    origin: Option<String>,
    /// Write the script to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Copy the script to the clipboard
    #[arg(short, long)]
    copy: bool,
    /// Fail on unrecognized authentication modes
    #[arg(long)]
    strict: bool,
    /// Choose the mode and resources interactively
    #[arg(short, long)]
    interactive: bool,
    /// Config file (defaults to ./exportgen.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            authentication: self.authentication.clone(),
            resources: self.resources.clone(),
            selection_file: self.selection_file.clone(),
            origin: self.origin.clone(),
            output: self.output.clone(),
            copy: self.copy,
            strict: self.strict,
            config: self.config.clone(),
        }
    }
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let options = args.options();

    let outcome = if args.interactive {
        let request = crate::app::api::prepare(&options)?;
        let Some(request) = prompt_request(request)? else {
            return Ok(());
        };
        crate::app::api::deliver(&request, &options)?
    } else {
        crate::app::api::generate(&options)?
    };

    report(&outcome)
}

fn report(outcome: &GenerateOutcome) -> Result<(), AppError> {
    report_to(outcome, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}

/// Print the outcome. When the script itself goes to `out`, notices go to `err`.
fn report_to(
    outcome: &GenerateOutcome,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), AppError> {
    match &outcome.output {
        Some(path) => {
            writeln!(
                out,
                "✅ Wrote {} export script for {} resource(s) to {}",
                outcome.mode,
                outcome.resources.len(),
                path.display()
            )?;
            if outcome.copied {
                writeln!(out, "{}", COPIED_NOTICE)?;
            }
        }
        None => {
            writeln!(out, "{}", outcome.script)?;
            if outcome.copied {
                writeln!(err, "{}", COPIED_NOTICE)?;
            }
        }
    }
    Ok(())
}

fn prompt_request(request: GenerationRequest) -> Result<Option<GenerationRequest>, AppError> {
    let Some(mode) = prompt_mode(request.mode.mode())? else {
        return Ok(None);
    };
    let Some(resources) = prompt_resources(request.resources)? else {
        return Ok(None);
    };

    Ok(Some(GenerationRequest {
        mode: ModeSelection::from(mode),
        resources,
        origin: request.origin,
    }))
}

fn prompt_mode(
    current: Option<AuthenticationMode>,
) -> Result<Option<AuthenticationMode>, AppError> {
    let items: Vec<String> = AuthenticationMode::ALL
        .iter()
        .map(|mode| format!("{} ({})", mode.name(), mode.description()))
        .collect();
    let default = current
        .and_then(|mode| AuthenticationMode::ALL.iter().position(|m| *m == mode))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select authentication mode")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select mode: {}", err)))?;

    Ok(selection.map(|index| AuthenticationMode::ALL[index]))
}

fn prompt_resources(
    resources: Vec<ResourceSelection>,
) -> Result<Option<Vec<ResourceSelection>>, AppError> {
    if resources.is_empty() {
        let entered: String = Input::new()
            .with_prompt("Resources to export (comma-separated)")
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::Prompt(format!("Failed to read resources: {}", err)))?;
        return Ok(Some(parse_entered(&entered)));
    }

    let items: Vec<(&str, bool)> =
        resources.iter().map(|resource| (resource.name.as_str(), resource.checked)).collect();
    let Some(chosen) = MultiSelect::new()
        .with_prompt("Select resources to export")
        .items_checked(&items)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select resources: {}", err)))?
    else {
        return Ok(None);
    };

    Ok(Some(apply_choices(resources, &chosen)))
}

/// Checked resources from a comma-separated list. Blank entries are skipped.
fn parse_entered(entered: &str) -> Vec<ResourceSelection> {
    entered
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ResourceSelection::checked)
        .collect()
}

/// Set each resource's `checked` flag from the chosen indices, keeping the original order.
fn apply_choices(resources: Vec<ResourceSelection>, chosen: &[usize]) -> Vec<ResourceSelection> {
    resources
        .into_iter()
        .enumerate()
        .map(|(index, resource)| ResourceSelection { checked: chosen.contains(&index), ..resource })
        .collect()
}
