//! Shared data models for the checker: source lines, findings, and
//! per-file lint outputs.

pub mod line;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::report::ValidationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a finding. Closed set.
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.pad("error"),
            Severity::Warning => f.pad("warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Identifier of the rule that produced a finding.
pub enum RuleId {
    LineLength,
    NameLength,
    Uppercase,
    DdDisposition,
    UnmatchedQuote,
    MissingJob,
}

impl RuleId {
    pub const ALL: [RuleId; 6] = [
        RuleId::LineLength,
        RuleId::NameLength,
        RuleId::Uppercase,
        RuleId::DdDisposition,
        RuleId::UnmatchedQuote,
        RuleId::MissingJob,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::LineLength => "line-length",
            RuleId::NameLength => "name-length",
            RuleId::Uppercase => "uppercase",
            RuleId::DdDisposition => "dd-disposition",
            RuleId::UnmatchedQuote => "unmatched-quote",
            RuleId::MissingJob => "missing-job",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim();
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(want))
            .ok_or_else(|| Error::UnknownRule(want.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single reported issue anchored to a 1-based line number.
pub struct Finding {
    pub line: usize,
    pub severity: Severity,
    pub rule: RuleId,
    pub message: String,
}

impl Finding {
    pub fn error(line: usize, rule: RuleId, message: &str) -> Self {
        Finding {
            line,
            severity: Severity::Error,
            rule,
            message: message.to_string(),
        }
    }

    pub fn warning(line: usize, rule: RuleId, message: &str) -> Self {
        Finding {
            line,
            severity: Severity::Warning,
            rule,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
/// Validation result for one input (file path or `-` for stdin).
pub struct FileReport {
    pub file: String,
    pub report: ValidationReport,
}

#[derive(Debug, Default, Serialize)]
/// Aggregated summary across all checked inputs.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

#[derive(Debug, Default, Serialize)]
/// Lint results container for a multi-file run.
pub struct LintResult {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_id_parses_case_insensitively() {
        assert_eq!("Uppercase".parse::<RuleId>().unwrap(), RuleId::Uppercase);
        assert_eq!(
            " dd-disposition ".parse::<RuleId>().unwrap(),
            RuleId::DdDisposition
        );
        assert!(matches!(
            "no-such-rule".parse::<RuleId>(),
            Err(Error::UnknownRule(r)) if r == "no-such-rule"
        ));
    }

    #[test]
    fn test_finding_serializes_kebab_rule_and_lowercase_severity() {
        let f = Finding::warning(3, RuleId::LineLength, "msg");
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["line"], 3);
        assert_eq!(v["severity"], "warning");
        assert_eq!(v["rule"], "line-length");
    }
}
