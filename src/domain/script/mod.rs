//! Export script assembly.
//!
//! A generated script is the concatenation of four sections, in order:
//! header, authentication prompts, resource export statement, authentication arguments.
//! Every section except the last ends with a line break. The arguments fragment continues the
//! export statement on the same line.

mod origin;
mod sections;

use chrono::{Local, NaiveDateTime};

use crate::domain::authentication::ModeSelection;
use crate::domain::resource::ResourceSelection;

pub use origin::normalize_origin;

/// Environment values that end up in the script header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptContext {
    /// Origin the script is attributed to.
    pub origin: String,
    /// Local wall-clock time of generation.
    pub generated_at: NaiveDateTime,
}

impl ScriptContext {
    pub fn new(origin: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self { origin: origin.into(), generated_at }
    }

    /// Context stamped with the current local time.
    pub fn capture(origin: impl Into<String>) -> Self {
        Self::new(origin, Local::now().naive_local())
    }
}

/// Builds export scripts from an authentication mode and a resource selection.
///
/// All builders are pure: identical inputs give byte-identical output, and no input makes them
/// fail.
pub struct ScriptAssembler;

impl ScriptAssembler {
    /// Attribution and information comment lines, followed by a blank line.
    pub fn build_header(origin: &str, now: NaiveDateTime) -> String {
        sections::header(origin, now)
    }

    /// Mode-specific comment and prompt lines, followed by a blank line.
    ///
    /// Unrecognized modes yield only the blank line.
    pub fn build_prompts(mode: &ModeSelection) -> String {
        sections::prompts(mode)
    }

    /// Export statement listing the checked resources in input order. No trailing line break.
    pub fn build_resource_export(resources: &[ResourceSelection]) -> String {
        sections::resource_export(resources)
    }

    /// Space-prefixed argument fragment passing the mode's variables to the export command.
    ///
    /// Unrecognized modes yield an empty fragment.
    pub fn build_authentication_args(mode: &ModeSelection) -> &'static str {
        sections::authentication_args(mode)
    }

    /// Assemble the complete script.
    pub fn assemble(
        mode: &ModeSelection,
        resources: &[ResourceSelection],
        origin: &str,
        now: NaiveDateTime,
    ) -> String {
        if let ModeSelection::Unrecognized(raw) = mode {
            tracing::warn!(
                mode = %raw,
                "unrecognized authentication mode; script will have no prompts or credentials"
            );
        }

        let header = Self::build_header(origin, now);
        let prompts = Self::build_prompts(mode);
        let export = Self::build_resource_export(resources);
        let arguments = Self::build_authentication_args(mode);

        tracing::debug!(
            header = header.len(),
            prompts = prompts.len(),
            export = export.len(),
            arguments = arguments.len(),
            "assembled export script"
        );

        [header.as_str(), prompts.as_str(), export.as_str(), arguments].concat()
    }

    /// Assemble the complete script for a captured context.
    pub fn assemble_with_context(
        mode: &ModeSelection,
        resources: &[ResourceSelection],
        context: &ScriptContext,
    ) -> String {
        Self::assemble(mode, resources, &context.origin, context.generated_at)
    }
}
