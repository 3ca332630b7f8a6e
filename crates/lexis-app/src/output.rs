use std::fmt::Write;

use lexis_core::RunReport;

/// PASS/FAIL line per check, indented failure text, then a summary line
pub fn render_text(run: &RunReport) -> String {
    let mut out = String::new();

    for check in &run.checks {
        match check.failure_message() {
            None => {
                let _ = writeln!(out, "PASS {}", check.check);
            }
            Some(message) => {
                let _ = writeln!(out, "FAIL {}", check.check);
                for line in message.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
        }
    }

    let _ = write!(
        out,
        "{} checks, {} failed, {} violations",
        run.checks.len(),
        run.failed_checks().count(),
        run.violation_count()
    );
    out
}

pub fn render_json(run: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(run)
}
