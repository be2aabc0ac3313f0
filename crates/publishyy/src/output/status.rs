use chrono::{Local, NaiveTime};
use publishyy_operations::traits::{StatusKind, StatusReporter};

const PRODUCT: &str = "PUBLISHYY";

fn symbol(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => "ℹ",
        StatusKind::Success => "✔",
        StatusKind::Skipped => "↷",
        StatusKind::Warning => "⚠",
        StatusKind::Failure => "✖",
    }
}

/// `"<symbol> PUBLISHYY | HH:MM:SS | message"`
pub(crate) fn format_status_line(time: NaiveTime, kind: StatusKind, message: &str) -> String {
    format!(
        "{} {PRODUCT} | {} | {message}",
        symbol(kind),
        time.format("%H:%M:%S")
    )
}

/// Prints status lines to stdout, stamped with the local time.
pub(crate) struct TerminalReporter;

impl StatusReporter for TerminalReporter {
    fn report(&self, kind: StatusKind, message: &str) {
        println!("{}", format_status_line(Local::now().time(), kind, message));
    }

    fn tool_output(&self, text: &str) {
        for line in text.lines() {
            println!("    {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    #[test]
    fn success_line_has_symbol_product_time_and_message() {
        let line = format_status_line(
            at(9, 5, 3),
            StatusKind::Success,
            "Config file found: pubconfig.json",
        );

        assert_eq!(line, "✔ PUBLISHYY | 09:05:03 | Config file found: pubconfig.json");
    }

    #[test]
    fn every_kind_has_a_distinct_symbol() {
        let kinds = [
            StatusKind::Info,
            StatusKind::Success,
            StatusKind::Skipped,
            StatusKind::Warning,
            StatusKind::Failure,
        ];

        let mut symbols: Vec<&str> = kinds.iter().map(|k| symbol(*k)).collect();
        symbols.sort_unstable();
        symbols.dedup();

        assert_eq!(symbols.len(), kinds.len());
    }

    #[test]
    fn failure_line_keeps_message_verbatim() {
        let line = format_status_line(at(23, 59, 59), StatusKind::Failure, "`npx tsc` failed.");

        assert!(line.starts_with("✖ PUBLISHYY | 23:59:59 | "));
        assert!(line.ends_with("`npx tsc` failed."));
    }
}
