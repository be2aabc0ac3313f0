use std::fmt;

/// An external program and its arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, A>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, shell_words::join(&self.args))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn succeeded(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn failed(stderr: &str) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Whatever the tool printed: stdout when present, stderr otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        let stdout = self.stdout.trim();
        if stdout.is_empty() {
            self.stderr.trim()
        } else {
            stdout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let invocation = Invocation::new("git", ["commit", "-m", "fix the thing"]);

        assert_eq!(invocation.to_string(), "git commit -m 'fix the thing'");
    }

    #[test]
    fn display_without_arguments() {
        assert_eq!(Invocation::new("npm", Vec::<String>::new()).to_string(), "npm");
    }

    #[test]
    fn text_prefers_stdout() {
        let output = CommandOutput {
            success: true,
            stdout: "  built\n".to_string(),
            stderr: "warning".to_string(),
        };

        assert_eq!(output.text(), "built");
    }

    #[test]
    fn text_falls_back_to_stderr() {
        let output = CommandOutput::failed("boom\n");

        assert_eq!(output.text(), "boom");
    }
}
