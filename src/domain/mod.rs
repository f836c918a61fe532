pub mod authentication;
pub mod configuration;
pub mod error;
pub mod resource;
pub mod script;

pub use authentication::{AuthenticationMode, ModeSelection};
pub use configuration::GeneratorConfig;
pub use error::AppError;
pub use resource::ResourceSelection;
pub use script::{ScriptAssembler, ScriptContext};
