use publishyy_core::{Classification, Stage, VersionChoice};
use publishyy_version::{BETA_BASE, bump_version, next_beta_version, parse_version};
use tracing::debug;

use super::{PipelineOperation, PipelineRun, StageStatus};
use crate::error::OperationError;
use crate::operations::dependency_check::DependencyCheck;
use crate::operations::resolve::resolve_or_prompt;
use crate::traits::{
    CommandRunner, ConfirmPrompt, InputPrompt, InteractionProvider, ProjectProvider,
    StatusReporter,
};
use crate::{CommandOutput, Invocation, Result, invocations};

const WHOLE_PROJECT: &str = "./";

impl<P, R, I, S> PipelineOperation<P, R, I, S>
where
    P: ProjectProvider,
    R: CommandRunner,
    I: InteractionProvider,
    S: StatusReporter,
{
    pub(super) fn check_updates(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        if run.report.package.dependencies.is_empty() {
            self.reporter.skipped("No dependencies to check.");
            return Ok(StageStatus::Skipped);
        }

        let enabled = resolve_or_prompt(run.config.update, || {
            self.interaction.confirm(&ConfirmPrompt::CheckDependencies)
        })?;
        if !enabled {
            self.reporter.skipped("Skipping dependency check.");
            return Ok(StageStatus::Skipped);
        }

        let outcome = DependencyCheck::new(&self.runner, &self.interaction, &self.reporter)
            .run(&run.root, &run.report.package.dependencies)?;
        run.report.decisions = outcome.decisions;

        Ok(StageStatus::Succeeded)
    }

    pub(super) fn build(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let bundle = resolve_or_prompt(run.config.bundle, || {
            self.interaction.confirm(&ConfirmPrompt::Bundle)
        })?;

        if bundle {
            self.reporter.info("Bundling the project...");
            let install = invocations::npm_install_dev(&["tsup", "typescript"]);
            self.run_fatal(run, Stage::Build, &install)?;
            self.run_fatal(run, Stage::Build, &invocations::npx("tsup", &[]))?;
            self.reporter.success("Project bundled successfully.");
        } else {
            self.reporter.skipped("Skipping bundling.");
            self.reporter.info("Compiling the project...");
            self.run_fatal(run, Stage::Build, &invocations::npm_install_dev(&["typescript"]))?;
            self.run_fatal(run, Stage::Build, &invocations::npx("tsc", &[]))?;
            self.reporter.success("Project compiled successfully.");
        }

        Ok(StageStatus::Succeeded)
    }

    pub(super) fn check_types(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let enabled = resolve_or_prompt(run.config.check_types, || {
            self.interaction.confirm(&ConfirmPrompt::CheckTypes)
        })?;
        if !enabled {
            self.reporter.skipped("Skipping type checking.");
            return Ok(StageStatus::Skipped);
        }

        self.reporter.info("Checking exported types...");
        Ok(self.run_best_effort(
            run,
            &[
                invocations::npm_install_dev(&["@arethetypeswrong/cli"]),
                invocations::npx("attw", &["--pack"]),
            ],
            "Types are exported correctly.",
            "Type check reported problems.",
        ))
    }

    pub(super) fn generate_docs(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let enabled = resolve_or_prompt(run.config.typedoc, || {
            self.interaction.confirm(&ConfirmPrompt::GenerateDocs)
        })?;
        if !enabled {
            self.reporter
                .skipped("Skipping typedoc documentation generation.");
            return Ok(StageStatus::Skipped);
        }

        self.reporter.info("Generating documentation...");
        Ok(self.run_best_effort(
            run,
            &[
                invocations::npm_install_dev(&["typedoc"]),
                invocations::npx("typedoc", &[]),
            ],
            "Documentation generated.",
            "Failed to generate documentation.",
        ))
    }

    pub(super) fn format(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let entries = resolve_or_prompt(run.config.format_folders.clone(), || {
            let mut choices = vec![WHOLE_PROJECT.to_string()];
            choices.extend(self.project_provider.top_level_entries(&run.root)?);
            self.interaction.select_format_entries(&choices)
        })?;

        if entries.is_empty() {
            self.reporter.skipped("Skipping code formatting.");
            return Ok(StageStatus::Skipped);
        }

        self.reporter.info("Formatting code...");
        Ok(self.run_best_effort(
            run,
            &[
                invocations::npm_install_dev(&["prettier"]),
                invocations::prettier_write(&entries),
            ],
            "Code formatted.",
            "Failed to format code.",
        ))
    }

    pub(super) fn commit(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let files = self
            .interaction
            .input(InputPrompt::FilesToAdd)?
            .into_result()?;
        let message = self
            .interaction
            .input(InputPrompt::CommitMessage)?
            .into_result()?;

        let add = match invocations::git_add(&files) {
            Ok(add) => add,
            Err(err) => {
                self.reporter
                    .failure(&format!("Failed to add files: {err}"));
                return Ok(StageStatus::Failed);
            }
        };

        let added = self.exec(run, &add);
        if !added.success {
            self.surface(&added);
            self.reporter.failure("Failed to add files.");
            return Ok(StageStatus::Failed);
        }

        let committed = self.exec(run, &invocations::git_commit(&message));
        self.surface(&committed);
        if !committed.success {
            self.reporter.failure("Failed to commit changes.");
            return Ok(StageStatus::Failed);
        }

        self.reporter.success("Changes committed.");
        Ok(StageStatus::Succeeded)
    }

    pub(super) fn version(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let current = run.report.package.version.clone();
        let choice = match run.version_choice {
            Some(choice) => {
                self.reporter
                    .info(&format!("Using preselected {choice} version bump."));
                choice
            }
            None => self.interaction.select_version(&current)?.into_result()?,
        };
        run.version_choice = Some(choice);

        let next = match self.next_version(&current, choice) {
            Ok(next) => next,
            Err(OperationError::Version(err)) => {
                self.reporter
                    .failure(&format!("Cannot compute the next version: {err}"));
                return Ok(StageStatus::Failed);
            }
            Err(err) => return Err(err),
        };

        debug!(%current, %next, %choice, "bumping version");
        run.report.package.version.clone_from(&next);

        let output = self.exec(run, &invocations::npm_version(&next));
        self.surface(&output);
        if !output.success {
            self.reporter
                .failure(&format!("Failed to set version {next}."));
            return Ok(StageStatus::Failed);
        }

        self.reporter
            .success(&format!("Version bumped from {current} to {next}."));
        Ok(StageStatus::Succeeded)
    }

    pub(super) fn push(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let extra = self
            .interaction
            .input(InputPrompt::PushArguments)?
            .into_result()?;

        let push = match invocations::git_push(&extra) {
            Ok(push) => push,
            Err(err) => {
                self.reporter.failure(&format!("Failed to push: {err}"));
                return Ok(StageStatus::Failed);
            }
        };

        let output = self.exec(run, &push);
        self.surface(&output);
        if !output.success {
            self.reporter.failure("Failed to push changes.");
            return Ok(StageStatus::Failed);
        }

        self.reporter.success("Changes pushed.");
        Ok(StageStatus::Succeeded)
    }

    pub(super) fn publish(&self, run: &mut PipelineRun) -> Result<StageStatus> {
        let package = &run.report.package;
        let confirmed = self
            .interaction
            .confirm(&ConfirmPrompt::Publish {
                package: package.display_name(),
                version: &package.version,
            })?
            .into_result()?;

        if !confirmed {
            self.reporter.skipped("Skipping publish.");
            return Ok(StageStatus::Skipped);
        }

        let tag = run.version_choice.and_then(VersionChoice::dist_tag);
        let output = self.exec(run, &invocations::npm_publish(tag));
        self.surface(&output);
        if !output.success {
            self.reporter.failure("Failed to publish the package.");
            return Ok(StageStatus::Failed);
        }

        self.reporter.success(&format!(
            "Published {}@{}.",
            run.report.package.display_name(),
            run.report.package.version
        ));
        run.report.published = true;
        Ok(StageStatus::Succeeded)
    }

    fn next_version(&self, current: &str, choice: VersionChoice) -> Result<String> {
        let classification = match choice {
            VersionChoice::Patch => Classification::Patch,
            VersionChoice::Minor => Classification::Minor,
            VersionChoice::Major => Classification::Major,
            VersionChoice::Beta => return Ok(next_beta_version(current, BETA_BASE)?),
            VersionChoice::Custom => {
                let custom = self
                    .interaction
                    .input(InputPrompt::CustomVersion)?
                    .into_result()?;
                return Ok(parse_version(&custom)?.to_string());
            }
        };

        let current = parse_version(current)?;
        Ok(bump_version(&current, classification).to_string())
    }

    /// Runs a command, treating a program that cannot be started as a failed run.
    fn exec(&self, run: &PipelineRun, invocation: &Invocation) -> CommandOutput {
        self.runner
            .run(&run.root, invocation)
            .unwrap_or_else(|err| CommandOutput::failed(&error_chain(&err)))
    }

    fn run_fatal(&self, run: &PipelineRun, stage: Stage, invocation: &Invocation) -> Result<()> {
        let output = self.exec(run, invocation);
        if output.success {
            return Ok(());
        }

        self.surface(&output);
        self.reporter.failure(&format!("`{invocation}` failed."));
        Err(OperationError::StageFailed {
            stage,
            output: output.text().to_string(),
        })
    }

    /// Stops at the first failing command; the last command's output is always shown.
    fn run_best_effort(
        &self,
        run: &PipelineRun,
        commands: &[Invocation],
        done: &str,
        failed: &str,
    ) -> StageStatus {
        for (index, invocation) in commands.iter().enumerate() {
            let output = self.exec(run, invocation);
            if !output.success || index + 1 == commands.len() {
                self.surface(&output);
            }
            if !output.success {
                self.reporter.failure(failed);
                return StageStatus::Failed;
            }
        }

        self.reporter.success(done);
        StageStatus::Succeeded
    }

    fn surface(&self, output: &CommandOutput) {
        let text = output.text();
        if !text.is_empty() {
            self.reporter.tool_output(text);
        }
    }
}

fn error_chain(err: &OperationError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
