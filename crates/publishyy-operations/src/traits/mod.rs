mod command_runner;
mod interaction;
mod project_provider;
mod status;

pub use command_runner::CommandRunner;
pub use interaction::{ConfirmPrompt, InputPrompt, InteractionProvider, Reply};
pub use project_provider::ProjectProvider;
pub use status::{StatusKind, StatusReporter};
