mod stages;

use std::path::{Path, PathBuf};

use publishyy_core::{
    DependencyUpdateDecision, PackageMetadata, ResolvedConfig, Stage, VersionChoice,
};
use publishyy_project::{ConfigDiscovery, NpmProject};
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{CommandRunner, InteractionProvider, ProjectProvider, StatusReporter};

#[derive(Debug, Clone, Default)]
pub struct PipelineInput {
    /// Explicit config file; when absent the project root is searched.
    pub config_path: Option<PathBuf>,
    /// Answers the version prompt ahead of time.
    pub bump: Option<VersionChoice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Skipped,
    Succeeded,
    /// The stage's tool failed but the pipeline carried on.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub stages: Vec<(Stage, StageStatus)>,
    pub decisions: Vec<DependencyUpdateDecision>,
    pub package: PackageMetadata,
    pub published: bool,
}

impl PipelineReport {
    #[must_use]
    pub fn status(&self, stage: Stage) -> Option<StageStatus> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, status)| *status)
    }
}

#[derive(Debug)]
pub enum PipelineOutcome {
    Completed(PipelineReport),
    Cancelled { stage: Stage, report: PipelineReport },
}

/// State threaded through the stages of a single run.
struct PipelineRun {
    root: PathBuf,
    config: ResolvedConfig,
    version_choice: Option<VersionChoice>,
    report: PipelineReport,
}

pub struct PipelineOperation<P, R, I, S> {
    project_provider: P,
    runner: R,
    interaction: I,
    reporter: S,
}

impl<P, R, I, S> PipelineOperation<P, R, I, S>
where
    P: ProjectProvider,
    R: CommandRunner,
    I: InteractionProvider,
    S: StatusReporter,
{
    pub fn new(project_provider: P, runner: R, interaction: I, reporter: S) -> Self {
        Self {
            project_provider,
            runner,
            interaction,
            reporter,
        }
    }

    /// Discovers the project and its config, then runs every stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the project or config cannot be loaded, if a fatal
    /// stage fails, or if a prompt cannot be shown.
    pub fn execute(&self, start_path: &Path, input: &PipelineInput) -> Result<PipelineOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.load_config(&project, input)?;
        self.run(project, config, input.bump)
    }

    /// Runs every stage once, in order. A `bump` skips the version prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if a fatal stage fails or if a prompt cannot be shown.
    pub fn run(
        &self,
        project: NpmProject,
        config: ResolvedConfig,
        bump: Option<VersionChoice>,
    ) -> Result<PipelineOutcome> {
        let mut run = PipelineRun {
            root: project.root,
            config,
            version_choice: bump,
            report: PipelineReport {
                stages: Vec::with_capacity(Stage::ALL.len()),
                decisions: Vec::new(),
                package: project.package,
                published: false,
            },
        };

        for stage in Stage::ALL {
            debug!(%stage, "entering stage");
            match self.run_stage(stage, &mut run) {
                Ok(status) => {
                    debug!(%stage, ?status, "stage finished");
                    run.report.stages.push((stage, status));
                }
                Err(OperationError::Cancelled) => {
                    self.reporter.warn(&format!("Cancelled during {stage}."));
                    return Ok(PipelineOutcome::Cancelled {
                        stage,
                        report: run.report,
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(PipelineOutcome::Completed(run.report))
    }

    fn run_stage(&self, stage: Stage, run: &mut PipelineRun) -> Result<StageStatus> {
        match stage {
            Stage::CheckUpdates => self.check_updates(run),
            Stage::Build => self.build(run),
            Stage::CheckTypes => self.check_types(run),
            Stage::GenerateDocs => self.generate_docs(run),
            Stage::Format => self.format(run),
            Stage::Commit => self.commit(run),
            Stage::Version => self.version(run),
            Stage::Push => self.push(run),
            Stage::Publish => self.publish(run),
        }
    }

    fn load_config(&self, project: &NpmProject, input: &PipelineInput) -> Result<ResolvedConfig> {
        self.reporter.info("Checking for config file...");

        if let Some(path) = &input.config_path {
            let config = self.project_provider.load_config_file(path)?;
            self.reporter
                .success(&format!("Config file found: {}", path.display()));
            return Ok(config);
        }

        let discovery = self.project_provider.discover_config(project)?;
        match &discovery {
            ConfigDiscovery::Found { path, .. } => {
                self.reporter
                    .success(&format!("Config file found: {}", path.display()));
            }
            ConfigDiscovery::Unsupported { path } => {
                self.reporter.warn(&format!(
                    "{} cannot be evaluated; use pubconfig.json or pub.config.toml. Continuing without config.",
                    path.display()
                ));
            }
            ConfigDiscovery::Missing => self.reporter.warn("No config file found"),
        }

        Ok(discovery.into_config())
    }
}
