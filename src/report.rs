//! Result aggregation and the terminal-style summary panel.
//!
//! `aggregate` is pure: counts and verdict are derived from the findings and
//! cannot be set independently. The wall-clock time shown in the summary is
//! read only by `render_terminal_now`.

use crate::models::{Finding, Severity};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Three-way summary derived from finding counts.
pub enum Verdict {
    Valid,
    WarningsOnly,
    ErrorsFound,
}

impl Verdict {
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        if errors > 0 {
            Verdict::ErrorsFound
        } else if warnings > 0 {
            Verdict::WarningsOnly
        } else {
            Verdict::Valid
        }
    }

    /// Status label used by the terminal panel.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::WarningsOnly => "WARNINGS ONLY",
            Verdict::ErrorsFound => "ERRORS FOUND",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Findings for one submission plus their derived counts.
pub struct ValidationReport {
    findings: Vec<Finding>,
    error_count: usize,
    warning_count: usize,
}

impl ValidationReport {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_counts(self.error_count, self.warning_count)
    }

    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings anchored to `line`, in emission order.
    pub fn findings_on(&self, line: usize) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.line == line)
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ValidationReport", 4)?;
        s.serialize_field("verdict", &self.verdict())?;
        s.serialize_field("errors", &self.error_count)?;
        s.serialize_field("warnings", &self.warning_count)?;
        s.serialize_field("findings", &self.findings)?;
        s.end()
    }
}

/// Build a report from findings. Order is preserved; nothing is sorted or
/// deduplicated.
pub fn aggregate(findings: Vec<Finding>) -> ValidationReport {
    let error_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warning_count = findings.len() - error_count;
    ValidationReport {
        findings,
        error_count,
        warning_count,
    }
}

/// Render the terminal panel with a caller-supplied time string.
pub fn render_terminal(report: &ValidationReport, time: &str) -> String {
    let mut out = String::new();
    out.push_str("JCL SYNTAX CHECK COMPLETE\n");
    out.push_str("========================\n");
    out.push_str(&format!("STATUS: {}\n", report.verdict().label()));
    if report.is_valid() {
        out.push_str(&format!("TIME: {}\n", time));
        out.push('\n');
        out.push_str("NO ERRORS OR WARNINGS FOUND.\n");
        out.push('\n');
        out.push_str("JCL IS READY FOR SUBMISSION.");
    } else {
        out.push_str(&format!("ERRORS: {}\n", report.error_count()));
        out.push_str(&format!("WARNINGS: {}\n", report.warning_count()));
        out.push_str(&format!("TIME: {}\n", time));
        out.push('\n');
        out.push_str("REVIEW THE ISSUES PANEL FOR DETAILS.");
    }
    out
}

/// Render the terminal panel stamped with the local wall-clock time.
pub fn render_terminal_now(report: &ValidationReport) -> String {
    let now = chrono::Local::now().format("%-I:%M:%S %p").to_string();
    render_terminal(report, &now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleId;

    #[test]
    fn test_aggregate_counts_and_verdict() {
        let report = aggregate(vec![
            Finding::warning(2, RuleId::Uppercase, "w"),
            Finding::error(1, RuleId::MissingJob, "e"),
            Finding::warning(2, RuleId::LineLength, "w2"),
        ]);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert_eq!(report.verdict(), Verdict::ErrorsFound);
        // emission order kept, line 2 before line 1
        assert_eq!(report.findings()[0].line, 2);
        assert_eq!(report.findings_on(2).count(), 2);
    }

    #[test]
    fn test_verdict_from_counts() {
        assert_eq!(aggregate(Vec::new()).verdict(), Verdict::Valid);
        let w = aggregate(vec![Finding::warning(1, RuleId::LineLength, "w")]);
        assert_eq!(w.verdict(), Verdict::WarningsOnly);
    }

    #[test]
    fn test_render_terminal_valid_and_errors() {
        let ok = render_terminal(&aggregate(Vec::new()), "10:00:00 AM");
        assert!(ok.contains("STATUS: VALID"));
        assert!(ok.contains("TIME: 10:00:00 AM"));
        assert!(ok.ends_with("JCL IS READY FOR SUBMISSION."));
        assert!(!ok.contains("ERRORS:"));

        let bad = render_terminal(
            &aggregate(vec![
                Finding::error(1, RuleId::MissingJob, "e"),
                Finding::warning(3, RuleId::DdDisposition, "w"),
            ]),
            "t",
        );
        assert!(bad.contains("STATUS: ERRORS FOUND\nERRORS: 1\nWARNINGS: 1\nTIME: t\n"));
        assert!(bad.ends_with("REVIEW THE ISSUES PANEL FOR DETAILS."));
    }

    #[test]
    fn test_report_json_shape() {
        let report = aggregate(vec![Finding::warning(4, RuleId::LineLength, "w")]);
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["verdict"], "warnings-only");
        assert_eq!(v["warnings"], 1);
        assert_eq!(v["errors"], 0);
        assert_eq!(v["findings"][0]["line"], 4);
    }
}
