use std::path::Path;

use crate::{CommandOutput, Invocation, Result};

pub trait CommandRunner: Send + Sync {
    /// Runs the invocation to completion in `working_dir` and captures its output.
    ///
    /// A non-zero exit status is reported through [`CommandOutput::success`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started.
    fn run(&self, working_dir: &Path, invocation: &Invocation) -> Result<CommandOutput>;
}
