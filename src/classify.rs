//! Line classifier.
//!
//! Assigns each line a `LineKind`. Order matters and the first match wins:
//! comment, instream end, JOB, DD, other `//` statement, plain text.

use crate::models::line::LineKind;
use regex::Regex;
use std::sync::LazyLock;

// Name fields are ASCII word characters; keywords match in any case.
static JOB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^//[A-Za-z0-9_]+\s+JOB\b").unwrap());
static DD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*//[A-Za-z0-9_]*\s+DD\b").unwrap());

/// Classify one line of JCL. Total over all strings.
pub fn classify(content: &str) -> LineKind {
    let trimmed = content.trim();
    if trimmed.starts_with("//*") {
        LineKind::Comment
    } else if trimmed == "/*" {
        LineKind::InstreamEnd
    } else if JOB_RE.is_match(content) {
        LineKind::JobStatement
    } else if DD_RE.is_match(content) {
        LineKind::DdStatement
    } else if trimmed.starts_with("//") {
        LineKind::OtherJcl
    } else {
        LineKind::PlainText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_instream_end() {
        assert_eq!(classify("//* a comment"), LineKind::Comment);
        assert_eq!(classify("   //*indented"), LineKind::Comment);
        assert_eq!(classify("/*"), LineKind::InstreamEnd);
        assert_eq!(classify("  /*  "), LineKind::InstreamEnd);
        assert_eq!(classify("/*EOF"), LineKind::PlainText);
    }

    #[test]
    fn test_job_statement_needs_name_and_separate_token() {
        assert_eq!(
            classify("//MYJOB    JOB (ACCT),'X'"),
            LineKind::JobStatement
        );
        assert_eq!(classify("//myjob job"), LineKind::JobStatement);
        assert_eq!(classify("// JOB"), LineKind::OtherJcl);
        assert_eq!(classify("//MYJOB JOBX"), LineKind::OtherJcl);
        assert_eq!(classify(" //MYJOB JOB"), LineKind::OtherJcl);
    }

    #[test]
    fn test_dd_statement_allows_empty_name_and_leading_space() {
        assert_eq!(classify("//SYSPRINT DD SYSOUT=*"), LineKind::DdStatement);
        assert_eq!(classify("//         DD DSN=A.B"), LineKind::DdStatement);
        assert_eq!(classify("  //IN dd *"), LineKind::DdStatement);
        assert_eq!(classify("//IN DDNAME=X"), LineKind::OtherJcl);
    }

    #[test]
    fn test_other_and_plain() {
        assert_eq!(classify("//"), LineKind::OtherJcl);
        assert_eq!(classify("//STEP01 EXEC PGM=IEFBR14"), LineKind::OtherJcl);
        assert_eq!(classify(""), LineKind::PlainText);
        assert_eq!(classify("  SORT FIELDS=(1,10,CH,A)"), LineKind::PlainText);
    }
}
