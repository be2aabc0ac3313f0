mod environment;
mod error;
mod interaction;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use publishyy_core::VersionChoice;
use publishyy_operations::operations::{
    PipelineInput, PipelineOperation, PipelineOutcome, PipelineReport, StageStatus,
};
use publishyy_operations::providers::{FileSystemProjectProvider, ProcessCommandRunner};
use publishyy_operations::traits::{InteractionProvider, StatusReporter};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::environment::non_interactive_reason;
use crate::error::{CliError, Result};
use crate::interaction::{NonInteractiveProvider, TerminalInteractionProvider};
use crate::output::TerminalReporter;

const LOG_ENV_VAR: &str = "PUBLISHYY_LOG";

#[derive(Parser)]
#[command(name = "publishyy")]
#[command(version = env!("PUBLISHYY_VERSION"))]
#[command(about = "Walk an npm package from source to the registry", long_about = None)]
struct Cli {
    /// Path to start package.json discovery from (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Config file to use instead of looking for one in the project root
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Version bump to apply instead of asking
    #[arg(long, value_enum)]
    bump: Option<VersionChoice>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let start_path = resolve_start_path(cli.path)?;
    let input = PipelineInput {
        config_path: cli.config,
        bump: cli.bump,
    };

    let outcome = match non_interactive_reason() {
        None => execute(TerminalInteractionProvider, &start_path, &input)?,
        Some(reason) => {
            debug!(%reason, "prompts disabled");
            TerminalReporter.warn(&format!("Prompts are unavailable: {reason}."));
            execute(NonInteractiveProvider, &start_path, &input)?
        }
    };

    match outcome {
        PipelineOutcome::Completed(report) => {
            summarize(&report);
            Ok(())
        }
        PipelineOutcome::Cancelled { stage, .. } => Err(CliError::Cancelled { stage }),
    }
}

fn execute<I: InteractionProvider>(
    interaction: I,
    start_path: &Path,
    input: &PipelineInput,
) -> Result<PipelineOutcome> {
    let operation = PipelineOperation::new(
        FileSystemProjectProvider::new(),
        ProcessCommandRunner::new(),
        interaction,
        TerminalReporter,
    );
    Ok(operation.execute(start_path, input)?)
}

fn summarize(report: &PipelineReport) {
    let failed: Vec<String> = report
        .stages
        .iter()
        .filter(|(_, status)| *status == StageStatus::Failed)
        .map(|(stage, _)| stage.to_string())
        .collect();

    if failed.is_empty() {
        TerminalReporter.success("All done.");
    } else {
        TerminalReporter.warn(&format!("Finished with failures in: {}.", failed.join(", ")));
    }
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
