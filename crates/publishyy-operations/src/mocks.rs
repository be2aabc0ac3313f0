use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use publishyy_core::{PackageMetadata, ResolvedConfig, VersionChoice};
use publishyy_project::{ConfigDiscovery, NpmProject};

use crate::traits::{
    CommandRunner, ConfirmPrompt, InputPrompt, InteractionProvider, ProjectProvider, Reply,
    StatusKind, StatusReporter,
};
use crate::{CommandOutput, Invocation, Result};

pub struct MockProjectProvider {
    project: NpmProject,
    config: ConfigDiscovery,
    entries: Vec<String>,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new(project: NpmProject) -> Self {
        Self {
            project,
            config: ConfigDiscovery::Missing,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn package(name: &str, version: &str, dependencies: &[(&str, &str)]) -> Self {
        Self::new(NpmProject {
            root: PathBuf::from("/mock/project"),
            package: PackageMetadata {
                name: Some(name.to_string()),
                version: version.to_string(),
                dependencies: dependencies
                    .iter()
                    .map(|(name, requirement)| (name.to_string(), requirement.to_string()))
                    .collect(),
            },
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: ResolvedConfig) -> Self {
        self.config = ConfigDiscovery::Found {
            path: self.project.root.join("pubconfig.json"),
            config,
        };
        self
    }

    #[must_use]
    pub fn with_unsupported_config(mut self, file: &str) -> Self {
        self.config = ConfigDiscovery::Unsupported {
            path: self.project.root.join(file),
        };
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: &[&str]) -> Self {
        self.entries = entries.iter().map(ToString::to_string).collect();
        self
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<NpmProject> {
        Ok(self.project.clone())
    }

    fn discover_config(&self, _project: &NpmProject) -> Result<ConfigDiscovery> {
        Ok(self.config.clone())
    }

    fn load_config_file(&self, _path: &Path) -> Result<ResolvedConfig> {
        Ok(self.config.clone().into_config())
    }

    fn top_level_entries(&self, _root: &Path) -> Result<Vec<String>> {
        Ok(self.entries.clone())
    }
}

/// Answers every invocation with success and empty output unless scripted otherwise.
#[derive(Default)]
pub struct MockCommandRunner {
    outputs: HashMap<String, CommandOutput>,
    invocations: Mutex<Vec<String>>,
}

impl MockCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output(mut self, command: &str, output: CommandOutput) -> Self {
        self.outputs.insert(command.to_string(), output);
        self
    }

    #[must_use]
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_output(command, CommandOutput::succeeded(stdout))
    }

    #[must_use]
    pub fn failing(self, command: &str, stderr: &str) -> Self {
        self.with_output(command, CommandOutput::failed(stderr))
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn ran(&self, command: &str) -> bool {
        self.invocations().iter().any(|c| c == command)
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, _working_dir: &Path, invocation: &Invocation) -> Result<CommandOutput> {
        let command = invocation.to_string();
        self.invocations
            .lock()
            .expect("lock poisoned")
            .push(command.clone());
        Ok(self
            .outputs
            .get(&command)
            .cloned()
            .unwrap_or_else(|| CommandOutput::succeeded("")))
    }
}

impl CommandRunner for Arc<MockCommandRunner> {
    fn run(&self, working_dir: &Path, invocation: &Invocation) -> Result<CommandOutput> {
        (**self).run(working_dir, invocation)
    }
}

/// Replies from a script keyed by prompt; unscripted prompts are cancelled.
pub struct MockInteractionProvider {
    confirms: HashMap<String, bool>,
    inputs: HashMap<&'static str, String>,
    version: Option<VersionChoice>,
    format_entries: Option<Vec<String>>,
    asked: Mutex<Vec<String>>,
}

impl MockInteractionProvider {
    #[must_use]
    pub fn all_cancelled() -> Self {
        Self {
            confirms: HashMap::new(),
            inputs: HashMap::new(),
            version: None,
            format_entries: None,
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Answers for the prompts that are asked on every run.
    #[must_use]
    pub fn release(files: &str, message: &str, version: VersionChoice) -> Self {
        Self::all_cancelled()
            .with_input(InputPrompt::FilesToAdd, files)
            .with_input(InputPrompt::CommitMessage, message)
            .with_input(InputPrompt::PushArguments, "")
            .with_version(version)
    }

    #[must_use]
    pub fn with_confirm(mut self, key: &str, answer: bool) -> Self {
        self.confirms.insert(key.to_string(), answer);
        self
    }

    #[must_use]
    pub fn with_input(mut self, prompt: InputPrompt, answer: &str) -> Self {
        self.inputs.insert(prompt.key(), answer.to_string());
        self
    }

    #[must_use]
    pub fn with_version(mut self, choice: VersionChoice) -> Self {
        self.version = Some(choice);
        self
    }

    #[must_use]
    pub fn with_format_entries(mut self, entries: &[&str]) -> Self {
        self.format_entries = Some(entries.iter().map(ToString::to_string).collect());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().expect("lock poisoned").clone()
    }

    fn record(&self, key: impl Into<String>) {
        self.asked.lock().expect("lock poisoned").push(key.into());
    }
}

impl InteractionProvider for MockInteractionProvider {
    fn confirm(&self, prompt: &ConfirmPrompt<'_>) -> Result<Reply<bool>> {
        let key = prompt.key();
        self.record(key.clone());
        Ok(self
            .confirms
            .get(&key)
            .map_or(Reply::Cancelled, |answer| Reply::Answered(*answer)))
    }

    fn input(&self, prompt: InputPrompt) -> Result<Reply<String>> {
        self.record(prompt.key());
        Ok(self
            .inputs
            .get(prompt.key())
            .map_or(Reply::Cancelled, |answer| Reply::Answered(answer.clone())))
    }

    fn select_version(&self, _current: &str) -> Result<Reply<VersionChoice>> {
        self.record("version");
        Ok(self.version.map_or(Reply::Cancelled, Reply::Answered))
    }

    fn select_format_entries(&self, choices: &[String]) -> Result<Reply<Vec<String>>> {
        self.record(format!("format:{}", choices.join(",")));
        Ok(self
            .format_entries
            .clone()
            .map_or(Reply::Cancelled, Reply::Answered))
    }
}

impl InteractionProvider for Arc<MockInteractionProvider> {
    fn confirm(&self, prompt: &ConfirmPrompt<'_>) -> Result<Reply<bool>> {
        (**self).confirm(prompt)
    }

    fn input(&self, prompt: InputPrompt) -> Result<Reply<String>> {
        (**self).input(prompt)
    }

    fn select_version(&self, current: &str) -> Result<Reply<VersionChoice>> {
        (**self).select_version(current)
    }

    fn select_format_entries(&self, choices: &[String]) -> Result<Reply<Vec<String>>> {
        (**self).select_format_entries(choices)
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(StatusKind, String)>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn lines(&self) -> Vec<(StatusKind, String)> {
        self.lines.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn messages(&self, kind: StatusKind) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message)
            .collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, kind: StatusKind, message: &str) {
        self.lines
            .lock()
            .expect("lock poisoned")
            .push((kind, message.to_string()));
    }

    fn tool_output(&self, text: &str) {
        self.report(StatusKind::Info, text);
    }
}

impl StatusReporter for Arc<RecordingReporter> {
    fn report(&self, kind: StatusKind, message: &str) {
        (**self).report(kind, message);
    }

    fn tool_output(&self, text: &str) {
        (**self).tool_output(text);
    }
}

/// Config that answers all five configurable stages with "no".
#[must_use]
pub fn everything_disabled() -> ResolvedConfig {
    ResolvedConfig {
        update: Some(false),
        bundle: Some(false),
        check_types: Some(false),
        typedoc: Some(false),
        format_folders: Some(Vec::new()),
    }
}
