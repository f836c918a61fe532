//! exportgen: assemble Microsoft365DSC export scripts from an authentication mode and a
//! resource selection.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use chrono::NaiveDateTime;

pub use app::api::{
    GenerateOptions, GenerateOutcome, GenerationRequest, ModeSummary, deliver, deliver_at,
    generate, generate_at, modes, prepare, prepare_at,
};
pub use domain::{
    AppError, AuthenticationMode, GeneratorConfig, ModeSelection, ResourceSelection,
    ScriptAssembler, ScriptContext,
};

/// Generate the export script text for the given selection state.
///
/// Pure: `origin` and `now` are supplied by the caller, nothing is read from the environment,
/// and the function never fails. Unrecognized modes produce a script with no prompts and no
/// authentication arguments.
pub fn generate_script(
    mode: &ModeSelection,
    resources: &[ResourceSelection],
    origin: &str,
    now: NaiveDateTime,
) -> String {
    ScriptAssembler::assemble(mode, resources, origin, now)
}
