use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::OperationError;
use crate::traits::CommandRunner;
use crate::{CommandOutput, Invocation, Result};

/// Runs invocations as child processes, resolving programs on `PATH` first so
/// that wrappers such as `npm.cmd` are found on Windows.
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, working_dir: &Path, invocation: &Invocation) -> Result<CommandOutput> {
        let program = which::which(&invocation.program)
            .unwrap_or_else(|_| invocation.program.clone().into());

        debug!(command = %invocation, dir = %working_dir.display(), "running external command");

        let output = Command::new(&program)
            .args(&invocation.args)
            .current_dir(working_dir)
            .output()
            .map_err(|source| OperationError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        debug!(command = %invocation, status = %output.status, "external command finished");

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
