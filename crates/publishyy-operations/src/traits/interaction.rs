use publishyy_core::{DependencyUpdateDecision, VersionChoice};

use crate::Result;
use crate::error::OperationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Answered(T),
    Cancelled,
}

impl<T> Reply<T> {
    /// # Errors
    ///
    /// Returns [`OperationError::Cancelled`] if the user backed out of the prompt.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Answered(value) => Ok(value),
            Self::Cancelled => Err(OperationError::Cancelled),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt<'a> {
    CheckDependencies,
    Update(&'a DependencyUpdateDecision),
    Bundle,
    CheckTypes,
    GenerateDocs,
    Publish { package: &'a str, version: &'a str },
}

impl ConfirmPrompt<'_> {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CheckDependencies => "Check for latest versions of dependencies?".to_string(),
            Self::Update(decision) => format!(
                "A {} version update has been found for {}. Update from {} to {}?",
                decision.classification,
                decision.name,
                decision.current_version,
                decision.latest_version
            ),
            Self::Bundle => "Bundle the project?".to_string(),
            Self::CheckTypes => "Check if types are exported correctly?".to_string(),
            Self::GenerateDocs => "Generate typedoc documentation?".to_string(),
            Self::Publish { package, version } => {
                format!("Publish {package}@{version} to the npm registry?")
            }
        }
    }

    /// Stable identifier of the question, used in logs.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::CheckDependencies => "check-dependencies".to_string(),
            Self::Update(decision) => format!("update:{}", decision.name),
            Self::Bundle => "bundle".to_string(),
            Self::CheckTypes => "check-types".to_string(),
            Self::GenerateDocs => "generate-docs".to_string(),
            Self::Publish { .. } => "publish".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPrompt {
    FilesToAdd,
    CommitMessage,
    CustomVersion,
    PushArguments,
}

impl InputPrompt {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::FilesToAdd => "Files to add to the commit",
            Self::CommitMessage => "Commit message",
            Self::CustomVersion => "Custom version",
            Self::PushArguments => "Additional parameters for pushing",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FilesToAdd => "files-to-add",
            Self::CommitMessage => "commit-message",
            Self::CustomVersion => "custom-version",
            Self::PushArguments => "push-arguments",
        }
    }

    /// Only push parameters are optional; everything else needs an answer.
    #[must_use]
    pub fn allows_empty(self) -> bool {
        matches!(self, Self::PushArguments)
    }
}

pub trait InteractionProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm(&self, prompt: &ConfirmPrompt<'_>) -> Result<Reply<bool>>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn input(&self, prompt: InputPrompt) -> Result<Reply<String>>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select_version(&self, current: &str) -> Result<Reply<VersionChoice>>;

    /// `choices` starts with `./`, meaning the whole project.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select_format_entries(&self, choices: &[String]) -> Result<Reply<Vec<String>>>;
}
