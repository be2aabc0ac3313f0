use dialoguer::{Confirm, Input, MultiSelect, Select};
use publishyy_core::{Classification, VersionChoice};
use publishyy_operations::traits::{ConfirmPrompt, InputPrompt, InteractionProvider, Reply};
use publishyy_operations::{OperationError, Result};
use publishyy_version::{BETA_BASE, bump_version, next_beta_version, parse_version};

pub struct TerminalInteractionProvider;

impl InteractionProvider for TerminalInteractionProvider {
    fn confirm(&self, prompt: &ConfirmPrompt<'_>) -> Result<Reply<bool>> {
        let answer = Confirm::new()
            .with_prompt(prompt.message())
            .default(true)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(answer.map_or(Reply::Cancelled, Reply::Answered))
    }

    fn input(&self, prompt: InputPrompt) -> Result<Reply<String>> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt.message())
            .allow_empty(prompt.allows_empty());

        if prompt == InputPrompt::CustomVersion {
            input = input.validate_with(|value: &String| -> std::result::Result<(), String> {
                parse_version(value)
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            });
        }

        let answer = input.interact_text().map_err(prompt_error)?;
        Ok(Reply::Answered(answer.trim().to_string()))
    }

    fn select_version(&self, current: &str) -> Result<Reply<VersionChoice>> {
        let items: Vec<String> = VersionChoice::ALL
            .iter()
            .map(|choice| version_label(*choice, current))
            .collect();

        let selection = Select::new()
            .with_prompt(format!("Select the new version (current: {current})"))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(selection
            .and_then(|index| VersionChoice::ALL.get(index).copied())
            .map_or(Reply::Cancelled, Reply::Answered))
    }

    fn select_format_entries(&self, choices: &[String]) -> Result<Reply<Vec<String>>> {
        let selection = MultiSelect::new()
            .with_prompt("Select what to format (space to toggle)")
            .items(choices)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(match selection {
            Some(indices) => Reply::Answered(
                indices
                    .into_iter()
                    .filter_map(|i| choices.get(i).cloned())
                    .collect(),
            ),
            None => Reply::Cancelled,
        })
    }
}

/// Used when prompts cannot be shown; any question ends the run.
pub struct NonInteractiveProvider;

impl InteractionProvider for NonInteractiveProvider {
    fn confirm(&self, _prompt: &ConfirmPrompt<'_>) -> Result<Reply<bool>> {
        Err(OperationError::InteractionRequired)
    }

    fn input(&self, _prompt: InputPrompt) -> Result<Reply<String>> {
        Err(OperationError::InteractionRequired)
    }

    fn select_version(&self, _current: &str) -> Result<Reply<VersionChoice>> {
        Err(OperationError::InteractionRequired)
    }

    fn select_format_entries(&self, _choices: &[String]) -> Result<Reply<Vec<String>>> {
        Err(OperationError::InteractionRequired)
    }
}

fn prompt_error(e: dialoguer::Error) -> OperationError {
    match e {
        dialoguer::Error::IO(io_err) => OperationError::Io(io_err),
    }
}

/// Menu entry for a version choice, previewing the resulting version when it
/// can be computed from `current`.
fn version_label(choice: VersionChoice, current: &str) -> String {
    let preview = match choice {
        VersionChoice::Patch => bumped(current, Classification::Patch),
        VersionChoice::Minor => bumped(current, Classification::Minor),
        VersionChoice::Major => bumped(current, Classification::Major),
        VersionChoice::Beta => next_beta_version(current, BETA_BASE).ok(),
        VersionChoice::Custom => None,
    };

    match preview {
        Some(next) => format!("{choice} ({next})"),
        None => choice.to_string(),
    }
}

fn bumped(current: &str, classification: Classification) -> Option<String> {
    parse_version(current)
        .ok()
        .map(|version| bump_version(&version, classification).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_preview_the_next_version() {
        let labels: Vec<String> = VersionChoice::ALL
            .iter()
            .map(|choice| version_label(*choice, "1.4.2"))
            .collect();

        assert_eq!(
            labels,
            [
                "patch (1.4.3)",
                "minor (1.5.0)",
                "major (2.0.0)",
                "beta (0.1.120-beta.0)",
                "custom",
            ]
        );
    }

    #[test]
    fn unparseable_current_version_drops_preview() {
        assert_eq!(version_label(VersionChoice::Minor, "next"), "minor");
    }

    #[test]
    fn non_interactive_provider_refuses_every_prompt() {
        let provider = NonInteractiveProvider;

        assert!(matches!(
            provider.confirm(&ConfirmPrompt::Bundle),
            Err(OperationError::InteractionRequired)
        ));
        assert!(matches!(
            provider.input(InputPrompt::CommitMessage),
            Err(OperationError::InteractionRequired)
        ));
        assert!(matches!(
            provider.select_version("1.0.0"),
            Err(OperationError::InteractionRequired)
        ));
    }
}
