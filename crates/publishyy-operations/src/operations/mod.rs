mod dependency_check;
mod pipeline;
mod resolve;

pub use dependency_check::{DependencyCheck, DependencyCheckOutcome, LookupResult};
pub use pipeline::{PipelineInput, PipelineOperation, PipelineOutcome, PipelineReport, StageStatus};
pub use resolve::resolve_or_prompt;
