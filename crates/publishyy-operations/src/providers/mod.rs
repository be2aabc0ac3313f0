mod process;
mod project;

pub use process::ProcessCommandRunner;
pub use project::FileSystemProjectProvider;
