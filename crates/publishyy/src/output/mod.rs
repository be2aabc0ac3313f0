mod status;

pub(crate) use status::TerminalReporter;
