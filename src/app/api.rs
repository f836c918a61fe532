//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::{
    AppContext,
    commands::{generate, modes},
};
use crate::ports::NoopClipboard;
use crate::services::ArboardClipboard;

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome, GenerationRequest};
pub use crate::app::commands::modes::ModeSummary;
pub use crate::domain::AppError;

/// Generate an export script in the current directory.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, options)
}

/// Generate an export script, resolving relative paths and the default config against `path`.
///
/// The system clipboard is only opened when `options.copy` is set.
pub fn generate_at(
    path: impl Into<PathBuf>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    if options.copy {
        let mut ctx = AppContext::new(path, ArboardClipboard::new()?);
        generate::execute(&mut ctx, options)
    } else {
        let mut ctx = AppContext::new(path, NoopClipboard);
        generate::execute(&mut ctx, options)
    }
}

/// Resolve options and configuration without generating anything.
pub fn prepare(options: &GenerateOptions) -> Result<GenerationRequest, AppError> {
    prepare_at(std::env::current_dir()?, options)
}

/// Resolve options and configuration relative to `path`.
pub fn prepare_at(
    path: impl Into<PathBuf>,
    options: &GenerateOptions,
) -> Result<GenerationRequest, AppError> {
    let ctx = AppContext::new(path, NoopClipboard);
    generate::resolve(&ctx, options)
}

/// Generate and deliver the script for an already resolved request.
pub fn deliver(
    request: &GenerationRequest,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    deliver_at(std::env::current_dir()?, request, options)
}

/// Generate and deliver the script for a resolved request, relative to `path`.
pub fn deliver_at(
    path: impl Into<PathBuf>,
    request: &GenerationRequest,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    if options.copy {
        let mut ctx = AppContext::new(path, ArboardClipboard::new()?);
        generate::deliver(&mut ctx, request, options)
    } else {
        let mut ctx = AppContext::new(path, NoopClipboard);
        generate::deliver(&mut ctx, request, options)
    }
}

/// List the supported authentication modes.
pub fn modes() -> Vec<ModeSummary> {
    modes::list()
}
