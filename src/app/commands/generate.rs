//! Generate command - assembles an export script and delivers it.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::configuration::generator_config::DEFAULT_ORIGIN;
use crate::domain::script::normalize_origin;
use crate::domain::{
    AppError, AuthenticationMode, GeneratorConfig, ModeSelection, ResourceSelection,
    ScriptAssembler, ScriptContext,
};
use crate::ports::ClipboardWriter;
use crate::services::{load_config, load_selection};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Authentication mode name. Falls back to the config, then to `Credentials`.
    pub authentication: Option<String>,
    /// Resources to include, appended after the selection file entries.
    pub resources: Vec<String>,
    /// JSON or YAML selection file.
    pub selection_file: Option<PathBuf>,
    /// Origin for the header. Falls back to the config, then to `http://localhost`.
    pub origin: Option<String>,
    /// Write the script to this file instead of returning it for display.
    pub output: Option<PathBuf>,
    /// Copy the script to the clipboard.
    pub copy: bool,
    /// Reject unrecognized authentication modes instead of rendering a stub.
    pub strict: bool,
    /// Explicit config file path.
    pub config: Option<PathBuf>,
}

/// Fully resolved inputs for one script generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub mode: ModeSelection,
    pub resources: Vec<ResourceSelection>,
    pub origin: String,
}

impl GenerationRequest {
    /// Names of the resources that will be exported.
    pub fn exported_resources(&self) -> Vec<String> {
        self.resources.iter().filter(|r| r.checked).map(|r| r.name.clone()).collect()
    }
}

/// Result of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The generated script text.
    pub script: String,
    /// Mode the script was generated for.
    pub mode: ModeSelection,
    /// Exported resource names, in order.
    pub resources: Vec<String>,
    /// File the script was written to.
    pub output: Option<PathBuf>,
    /// Whether the script was copied to the clipboard.
    pub copied: bool,
}

/// Execute the generate command.
pub fn execute<C: ClipboardWriter>(
    ctx: &mut AppContext<C>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let request = resolve(ctx, options)?;
    deliver(ctx, &request, options)
}

/// Resolve command-line options and configuration into a generation request.
pub fn resolve<C: ClipboardWriter>(
    ctx: &AppContext<C>,
    options: &GenerateOptions,
) -> Result<GenerationRequest, AppError> {
    let config_path = options.config.as_ref().map(|path| ctx.resolve_path(path));
    let config = load_config(config_path.as_deref(), ctx.work_dir())?;

    let mode = resolve_mode(options, &config)?;
    let resources = resolve_resources(ctx, options, &config)?;
    let origin = match &options.origin {
        Some(raw) => normalize_origin(raw)?,
        None => config.origin().unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
    };

    Ok(GenerationRequest { mode, resources, origin })
}

/// Assemble the script for a resolved request and deliver it.
///
/// The wall clock is read once, here.
pub fn deliver<C: ClipboardWriter>(
    ctx: &mut AppContext<C>,
    request: &GenerationRequest,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let context = ScriptContext::capture(request.origin.as_str());
    let script =
        ScriptAssembler::assemble_with_context(&request.mode, &request.resources, &context);

    let output = match &options.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::write(&path, &script)?;
            tracing::info!(path = %path.display(), "wrote export script");
            Some(path)
        }
        None => None,
    };

    if options.copy {
        ctx.clipboard_mut().write_text(&script)?;
    }

    Ok(GenerateOutcome {
        script,
        mode: request.mode.clone(),
        resources: request.exported_resources(),
        output,
        copied: options.copy,
    })
}

fn resolve_mode(
    options: &GenerateOptions,
    config: &GeneratorConfig,
) -> Result<ModeSelection, AppError> {
    let requested = options.authentication.as_deref().or(config.script.authentication.as_deref());
    let mode = match requested {
        Some(raw) => ModeSelection::parse(raw),
        None => ModeSelection::from(AuthenticationMode::Credentials),
    };

    if options.strict
        && let ModeSelection::Unrecognized(raw) = &mode
    {
        return Err(AppError::UnknownAuthenticationMode(raw.clone()));
    }
    Ok(mode)
}

fn resolve_resources<C: ClipboardWriter>(
    ctx: &AppContext<C>,
    options: &GenerateOptions,
    config: &GeneratorConfig,
) -> Result<Vec<ResourceSelection>, AppError> {
    if options.selection_file.is_none() && options.resources.is_empty() {
        return Ok(config.resources.selected.iter().map(ResourceSelection::checked).collect());
    }

    let mut resources = match &options.selection_file {
        Some(path) => load_selection(&ctx.resolve_path(path))?,
        None => Vec::new(),
    };
    resources.extend(options.resources.iter().map(ResourceSelection::checked));
    Ok(resources)
}
