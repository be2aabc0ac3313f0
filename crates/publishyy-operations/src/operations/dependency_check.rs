use std::path::Path;

use indexmap::IndexMap;
use publishyy_core::{DependencyUpdateDecision, Stage};
use publishyy_version::{classify, parse_triple, strip_requirement};
use rayon::prelude::*;
use tracing::debug;

use crate::error::OperationError;
use crate::traits::{CommandRunner, ConfirmPrompt, InteractionProvider, StatusReporter};
use crate::{CommandOutput, Result, invocations};

/// Outcome of asking the registry for one dependency's latest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub name: String,
    pub requirement: String,
    pub latest: std::result::Result<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyCheckOutcome {
    pub decisions: Vec<DependencyUpdateDecision>,
    pub failed_lookups: Vec<String>,
}

impl DependencyCheckOutcome {
    /// Names the user agreed to update, in manifest order.
    pub fn approved(&self) -> impl Iterator<Item = &str> {
        self.decisions
            .iter()
            .filter(|d| d.approved)
            .map(|d| d.name.as_str())
    }
}

/// Compares every dependency against the registry and updates the ones the
/// user approves in a single install.
pub struct DependencyCheck<'a, R, I, S> {
    runner: &'a R,
    interaction: &'a I,
    reporter: &'a S,
}

impl<'a, R, I, S> DependencyCheck<'a, R, I, S>
where
    R: CommandRunner,
    I: InteractionProvider,
    S: StatusReporter,
{
    pub fn new(runner: &'a R, interaction: &'a I, reporter: &'a S) -> Self {
        Self {
            runner,
            interaction,
            reporter,
        }
    }

    /// # Errors
    ///
    /// Returns [`OperationError::StageFailed`] if the batch install fails, or
    /// [`OperationError::Cancelled`] if an update prompt is cancelled.
    pub fn run(
        &self,
        root: &Path,
        dependencies: &IndexMap<String, String>,
    ) -> Result<DependencyCheckOutcome> {
        self.reporter.info(&format!(
            "Checking {} dependencies for their latest versions...",
            dependencies.len()
        ));

        let lookups = self.lookup_latest(root, dependencies);

        let mut outcome = DependencyCheckOutcome::default();
        for lookup in lookups {
            match lookup.latest {
                Ok(latest) => {
                    let decision = self.decide(&lookup.name, &lookup.requirement, latest)?;
                    outcome.decisions.extend(decision);
                }
                Err(reason) => {
                    self.reporter
                        .failure(&format!("Failed to look up {}: {reason}", lookup.name));
                    outcome.failed_lookups.push(lookup.name);
                }
            }
        }

        self.install_approved(root, &outcome)?;

        Ok(outcome)
    }

    /// Queries all dependencies at once. Each lookup fills its own slot and the
    /// call returns only after every lookup has settled.
    pub fn lookup_latest(
        &self,
        root: &Path,
        dependencies: &IndexMap<String, String>,
    ) -> Vec<LookupResult> {
        let entries: Vec<(&String, &String)> = dependencies.iter().collect();

        entries
            .par_iter()
            .map(|(name, requirement)| {
                let invocation = invocations::npm_view_version(name);
                let latest = match self.runner.run(root, &invocation) {
                    Ok(output) => latest_from_output(&output),
                    Err(err) => Err(err.to_string()),
                };
                debug!(dependency = %name, ?latest, "looked up latest version");
                LookupResult {
                    name: (*name).clone(),
                    requirement: (*requirement).clone(),
                    latest,
                }
            })
            .collect()
    }

    fn decide(
        &self,
        name: &str,
        requirement: &str,
        latest: String,
    ) -> Result<Option<DependencyUpdateDecision>> {
        let current = strip_requirement(requirement);

        let Some(classification) = classify(current, &latest) else {
            self.reporter.warn(&format!(
                "Cannot compare versions of {name} ({requirement} and {latest}), skipping."
            ));
            return Ok(None);
        };

        let newer = parse_triple(strip_requirement(&latest)) > parse_triple(current);

        let mut decision = DependencyUpdateDecision {
            name: name.to_string(),
            current_version: current.to_string(),
            latest_version: latest,
            classification,
            approved: false,
        };

        if !classification.is_update() || !newer {
            self.reporter
                .success(&format!("Latest version of {name} is already installed."));
            return Ok(Some(decision));
        }

        decision.approved = self
            .interaction
            .confirm(&ConfirmPrompt::Update(&decision))?
            .into_result()?;

        Ok(Some(decision))
    }

    fn install_approved(&self, root: &Path, outcome: &DependencyCheckOutcome) -> Result<()> {
        let approved: Vec<&str> = outcome.approved().collect();

        if approved.is_empty() {
            if outcome.failed_lookups.is_empty() {
                self.reporter.success("All dependencies are up to date.");
            } else {
                self.reporter.warn(&format!(
                    "No dependencies updated; could not look up {}.",
                    outcome.failed_lookups.join(", ")
                ));
            }
            return Ok(());
        }

        self.reporter
            .info(&format!("Updating dependencies: {}", approved.join(", ")));

        let invocation = invocations::npm_install_latest(&approved);
        let output = self
            .runner
            .run(root, &invocation)
            .unwrap_or_else(|err| CommandOutput::failed(&err.to_string()));

        if !output.success {
            self.reporter.failure("Failed to update dependencies.");
            return Err(OperationError::StageFailed {
                stage: Stage::CheckUpdates,
                output: output.text().to_string(),
            });
        }

        self.reporter
            .success("Dependencies have been updated successfully.");
        Ok(())
    }
}

fn latest_from_output(output: &CommandOutput) -> std::result::Result<String, String> {
    let latest = output.stdout.trim();
    if !output.success {
        return Err(output.text().to_string());
    }
    if latest.is_empty() {
        return Err("registry reported no version".to_string());
    }
    Ok(latest.to_string())
}
