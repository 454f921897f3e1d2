//! Rule table for the checker.
//!
//! Each line rule is a named predicate over a classified line that yields at
//! most one finding. Rules run in table order, which fixes the emission order
//! of findings that share a line. The missing-JOB check is the only rule that
//! looks across lines; it lives in `lint::evaluate_with`.

use crate::models::line::{LineKind, SourceLine};
use crate::models::{Finding, RuleId};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const MAX_LINE_LEN: usize = 72;
pub const MAX_NAME_LEN: usize = 8;

pub const MSG_LINE_LENGTH: &str = "Line exceeds 72 characters - may be truncated";
pub const MSG_NAME_LENGTH: &str = "Name field exceeds 8 characters";
pub const MSG_UPPERCASE: &str = "JCL typically uses uppercase - lowercase may cause issues";
pub const MSG_DD_DISPOSITION: &str = "DD statement may need DISP parameter";
pub const MSG_UNMATCHED_QUOTE: &str = "Unmatched single quote";
pub const MSG_MISSING_JOB: &str =
    "Missing JOB statement - every job must begin with a JOB statement";

static LONG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//[A-Za-z0-9_]{9,}").unwrap());
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'[^']*'").unwrap());

/// A line after classification, as seen by the rules.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub index: usize,
    pub text: &'a str,
    pub kind: LineKind,
}

impl<'a> LineContext<'a> {
    pub fn new(line: &'a SourceLine, kind: LineKind) -> Self {
        LineContext {
            index: line.index,
            text: line.visible(),
            kind,
        }
    }
}

/// A named, independently testable line predicate.
pub struct LineRule {
    pub id: RuleId,
    pub check: fn(&LineContext<'_>) -> Option<Finding>,
}

/// Line rules in evaluation order.
pub static LINE_RULES: [LineRule; 5] = [
    LineRule {
        id: RuleId::LineLength,
        check: check_line_length,
    },
    LineRule {
        id: RuleId::NameLength,
        check: check_name_length,
    },
    LineRule {
        id: RuleId::Uppercase,
        check: check_uppercase,
    },
    LineRule {
        id: RuleId::DdDisposition,
        check: check_dd_disposition,
    },
    LineRule {
        id: RuleId::UnmatchedQuote,
        check: check_unmatched_quote,
    },
];

/// R1: overlong non-comment lines.
pub fn check_line_length(ctx: &LineContext<'_>) -> Option<Finding> {
    (ctx.kind != LineKind::Comment && ctx.text.chars().count() > MAX_LINE_LEN)
        .then(|| Finding::warning(ctx.index, RuleId::LineLength, MSG_LINE_LENGTH))
}

/// R2: name field of 9+ characters on a line with no space at all.
///
/// Only lines with no space at all qualify; a long name followed by an
/// operation field does not trigger it.
pub fn check_name_length(ctx: &LineContext<'_>) -> Option<Finding> {
    (ctx.kind.is_statement() && LONG_NAME_RE.is_match(ctx.text) && !ctx.text.contains(' '))
        .then(|| Finding::error(ctx.index, RuleId::NameLength, MSG_NAME_LENGTH))
}

/// R3: lowercase letters outside single-quoted substrings.
pub fn check_uppercase(ctx: &LineContext<'_>) -> Option<Finding> {
    if !ctx.kind.is_statement() {
        return None;
    }
    let unquoted = QUOTED_RE.replace_all(ctx.text, "");
    unquoted
        .chars()
        .any(char::is_lowercase)
        .then(|| Finding::warning(ctx.index, RuleId::Uppercase, MSG_UPPERCASE))
}

/// R4: DD statements carrying no disposition-like parameter.
pub fn check_dd_disposition(ctx: &LineContext<'_>) -> Option<Finding> {
    if ctx.kind != LineKind::DdStatement {
        return None;
    }
    let has_disp = ["DISP=", "SYSOUT=", "DUMMY", "*"]
        .iter()
        .any(|needle| ctx.text.contains(needle));
    (!has_disp).then(|| Finding::warning(ctx.index, RuleId::DdDisposition, MSG_DD_DISPOSITION))
}

/// R5: odd number of single quotes, unless the line continues with a comma.
pub fn check_unmatched_quote(ctx: &LineContext<'_>) -> Option<Finding> {
    let quotes = ctx.text.matches('\'').count();
    (quotes % 2 != 0 && !ctx.text.ends_with(','))
        .then(|| Finding::error(ctx.index, RuleId::UnmatchedQuote, MSG_UNMATCHED_QUOTE))
}

/// The missing-JOB finding, always anchored to line 1.
pub fn missing_job() -> Finding {
    Finding::error(1, RuleId::MissingJob, MSG_MISSING_JOB)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Which rules are switched off for a run. Default: none.
pub struct RuleSet {
    disabled: BTreeSet<RuleId>,
}

impl RuleSet {
    pub fn all() -> Self {
        RuleSet::default()
    }

    pub fn without<I: IntoIterator<Item = RuleId>>(ids: I) -> Self {
        RuleSet {
            disabled: ids.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, id: RuleId) -> bool {
        !self.disabled.contains(&id)
    }

    pub fn disabled(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.disabled.iter().copied()
    }

    /// Enabled line rules in table order.
    pub fn line_rules(&self) -> impl Iterator<Item = &'static LineRule> + '_ {
        LINE_RULES.iter().filter(|r| self.is_enabled(r.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn run(rule: fn(&LineContext<'_>) -> Option<Finding>, text: &str) -> Option<Finding> {
        let line = SourceLine::new(7, text);
        let ctx = LineContext::new(&line, classify(text));
        rule(&ctx)
    }

    #[test]
    fn test_line_length_exempts_comments() {
        let long = "X".repeat(80);
        let f = run(check_line_length, &long).unwrap();
        assert_eq!(f.line, 7);
        assert_eq!(f.message, MSG_LINE_LENGTH);
        assert!(run(check_line_length, &format!("//*{long}")).is_none());
        assert!(run(check_line_length, &"X".repeat(72)).is_none());
    }

    #[test]
    fn test_line_length_counts_chars_not_bytes() {
        let s = "\u{e9}".repeat(72);
        assert!(run(check_line_length, &s).is_none());
    }

    #[test]
    fn test_name_length_only_without_spaces() {
        let f = run(check_name_length, "//TOOLONGNAME").unwrap();
        assert_eq!(f.message, MSG_NAME_LENGTH);
        assert!(run(check_name_length, "//TOOLONGNAME EXEC PGM=X").is_none());
        assert!(run(check_name_length, "//SHORT").is_none());
        assert!(run(check_name_length, "//*TOOLONGNAME").is_none());
    }

    #[test]
    fn test_uppercase_ignores_quoted_text() {
        assert!(run(check_uppercase, "//MYJOB JOB (ACCT),'my job'").is_none());
        assert!(run(check_uppercase, "//step1 EXEC PGM=X").is_some());
        assert!(run(check_uppercase, "//* lowercase comment").is_none());
        assert!(run(check_uppercase, "  sort fields=(1,10,CH,A)").is_none());
    }

    #[test]
    fn test_dd_disposition_accepts_any_marker() {
        assert!(run(check_dd_disposition, "//OUT DD DSN=MY.FILE").is_some());
        assert!(run(check_dd_disposition, "//OUT DD DSN=MY.FILE,DISP=SHR").is_none());
        assert!(run(check_dd_disposition, "//SYSIN DD *").is_none());
        assert!(run(check_dd_disposition, "//SYSIN DD DUMMY").is_none());
        assert!(run(check_dd_disposition, "//STEP EXEC PGM=X").is_none());
    }

    #[test]
    fn test_unmatched_quote_allows_continuation_comma() {
        assert!(run(check_unmatched_quote, "//a'b").is_some());
        assert!(run(check_unmatched_quote, "//J JOB (A),'MY JOB,").is_none());
        assert!(run(check_unmatched_quote, "//J JOB (A),'OK'").is_none());
        assert!(run(check_unmatched_quote, "//* it's a comment").is_some());
    }

    #[test]
    fn test_rule_set_filters_in_table_order() {
        let set = RuleSet::without([RuleId::Uppercase, RuleId::MissingJob]);
        let ids: Vec<_> = set.line_rules().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                RuleId::LineLength,
                RuleId::NameLength,
                RuleId::DdDisposition,
                RuleId::UnmatchedQuote
            ]
        );
        assert!(!set.is_enabled(RuleId::MissingJob));
        assert!(RuleSet::all().is_enabled(RuleId::MissingJob));
    }
}
