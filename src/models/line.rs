//! Source lines and their derived classification.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One line of submitted JCL text. `index` is 1-based and never reassigned;
/// `content` is kept exactly as submitted.
pub struct SourceLine {
    pub index: usize,
    pub content: String,
}

impl SourceLine {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        SourceLine {
            index,
            content: content.into(),
        }
    }

    /// Content without a trailing carriage return left over from CRLF input.
    pub fn visible(&self) -> &str {
        self.content.strip_suffix('\r').unwrap_or(&self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Line category derived by the classifier.
pub enum LineKind {
    Comment,
    InstreamEnd,
    JobStatement,
    DdStatement,
    OtherJcl,
    PlainText,
}

impl LineKind {
    /// Any `//`-prefixed statement that is not a comment.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            LineKind::JobStatement | LineKind::DdStatement | LineKind::OtherJcl
        )
    }
}

/// Split raw text into numbered lines on `\n`.
///
/// Empty input yields no lines at all; any other input yields one line per
/// `\n`-separated segment, including a trailing empty segment.
pub fn split_lines(text: &str) -> Vec<SourceLine> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .enumerate()
        .map(|(i, s)| SourceLine::new(i + 1, s))
        .collect()
}
