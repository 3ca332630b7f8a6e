use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Level or category layout deviates from the fixed contract
    Structural,
    /// Missing field, wrong type, wrong key count, empty content
    Field,
    Casing,
    MissingAsset,
    Unreachable,
    CountMismatch,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Structural => "structural",
            ViolationKind::Field => "field",
            ViolationKind::Casing => "casing",
            ViolationKind::MissingAsset => "missing-asset",
            ViolationKind::Unreachable => "unreachable",
            ViolationKind::CountMismatch => "count-mismatch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a single check: it fails iff it collected any violation
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub check: String,
    /// Optional first line of the failure text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new(check: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            header: None,
            violations: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn push(&mut self, kind: ViolationKind, message: impl Into<String>) {
        self.violations.push(Violation::new(kind, message));
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Newline-joined failure text, `None` when the check passed
    pub fn failure_message(&self) -> Option<String> {
        if self.passed() {
            return None;
        }

        let mut lines: Vec<&str> = Vec::with_capacity(self.violations.len() + 1);
        if let Some(header) = &self.header {
            lines.push(header);
        }
        lines.extend(self.violations.iter().map(|v| v.message.as_str()));
        Some(lines.join("\n"))
    }
}

/// All check outcomes of one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    pub fn push(&mut self, report: CheckReport) {
        self.checks.push(report);
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckReport::passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckReport> {
        self.checks.iter().filter(|c| !c.passed())
    }

    pub fn violation_count(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }

    pub fn get(&self, check: &str) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.check == check)
    }
}
