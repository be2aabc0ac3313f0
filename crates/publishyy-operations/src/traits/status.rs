#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Info,
    Success,
    Skipped,
    Warning,
    Failure,
}

/// Receives progress lines as the pipeline moves through its stages.
pub trait StatusReporter: Send + Sync {
    fn report(&self, kind: StatusKind, message: &str);

    /// Raw text printed by an external tool, shown as-is.
    fn tool_output(&self, text: &str);

    fn info(&self, message: &str) {
        self.report(StatusKind::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(StatusKind::Success, message);
    }

    fn skipped(&self, message: &str) {
        self.report(StatusKind::Skipped, message);
    }

    fn warn(&self, message: &str) {
        self.report(StatusKind::Warning, message);
    }

    fn failure(&self, message: &str) {
        self.report(StatusKind::Failure, message);
    }
}
