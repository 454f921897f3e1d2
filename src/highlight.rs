//! JCL syntax highlighter.
//!
//! Produces a renderer-agnostic stream of styled spans per line. Concatenating
//! the span texts of a line always reproduces the line exactly; printers map
//! styles to colors (see `output`).

use crate::models::line::split_lines;
use serde::Serialize;

/// Statement verbs.
pub const KEYWORDS: &[&str] = &[
    "JOB", "EXEC", "DD", "PROC", "PEND", "IF", "THEN", "ELSE", "ENDIF", "SET", "INCLUDE",
    "JCLLIB", "OUTPUT", "CNTL", "ENDCNTL",
];

/// Well-known operand keywords and subparameter values.
pub const PARAMETERS: &[&str] = &[
    "PGM", "PARM", "COND", "TIME", "REGION", "ACCT", "CLASS", "MSGCLASS", "MSGLEVEL", "NOTIFY",
    "TYPRUN", "RESTART", "RD", "DSN", "DISP", "DCB", "SPACE", "UNIT", "VOL", "LABEL", "SYSOUT",
    "DUMMY", "DATA", "DLM", "DEST", "HOLD", "COPIES", "BURST", "RECFM", "LRECL", "BLKSIZE",
    "DSORG", "KEYLEN", "BUFNO", "NEW", "OLD", "SHR", "MOD", "CATLG", "UNCATLG", "DELETE",
    "KEEP", "PASS", "CYL", "TRK", "RLSE", "CONTIG", "MXIG", "ALX", "ROUND", "STEPLIB", "SYSIN",
    "SYSPRINT", "SYSUT1", "SYSUT2",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Comment,
    Keyword,
    Parameter,
    String,
    DatasetName,
    Number,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    fn new(text: &str, style: Style) -> Self {
        Span {
            text: text.to_string(),
            style,
        }
    }
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_dsn_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'(' | b')' | b'&' | b'+' | b'-')
}

fn word_style(word: &str) -> Style {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        Style::Number
    } else if KEYWORDS.contains(&word) {
        Style::Keyword
    } else if PARAMETERS.contains(&word) {
        Style::Parameter
    } else {
        Style::Plain
    }
}

struct SpanBuf {
    spans: Vec<Span>,
}

impl SpanBuf {
    fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        if style == Style::Plain {
            if let Some(last) = self.spans.last_mut() {
                if last.style == Style::Plain {
                    last.text.push_str(text);
                    return;
                }
            }
        }
        self.spans.push(Span::new(text, style));
    }
}

/// Split one line into styled spans.
pub fn highlight_line(line: &str) -> Vec<Span> {
    let trimmed = line.trim();
    if trimmed.starts_with("//*") || trimmed == "/*" {
        return if line.is_empty() {
            Vec::new()
        } else {
            vec![Span::new(line, Style::Comment)]
        };
    }

    let bytes = line.as_bytes();
    let mut buf = SpanBuf { spans: Vec::new() };
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\'' {
            match line[i + 1..].find('\'') {
                Some(off) => {
                    let end = i + 1 + off + 1;
                    buf.push(&line[i..end], Style::String);
                    i = end;
                }
                None => {
                    buf.push("'", Style::Plain);
                    i += 1;
                }
            }
        } else if is_word(b) {
            let start = i;
            while i < bytes.len() && is_word(bytes[i]) {
                i += 1;
            }
            let word = &line[start..i];
            if word.eq_ignore_ascii_case("DSN") && bytes.get(i) == Some(&b'=') {
                buf.push(word, Style::Parameter);
                buf.push("=", Style::Plain);
                i += 1;
                let vstart = i;
                while i < bytes.len() && is_dsn_char(bytes[i]) {
                    i += 1;
                }
                buf.push(&line[vstart..i], Style::DatasetName);
            } else {
                buf.push(word, word_style(word));
            }
        } else {
            // Copy one whole char so multi-byte text stays on a boundary.
            let ch_len = line[i..].chars().next().map_or(1, char::len_utf8);
            buf.push(&line[i..i + ch_len], Style::Plain);
            i += ch_len;
        }
    }
    buf.spans
}

/// Highlight every line of `text`.
pub fn highlight(text: &str) -> Vec<Vec<Span>> {
    split_lines(text)
        .iter()
        .map(|l| highlight_line(l.visible()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(line: &str) -> Vec<(String, Style)> {
        highlight_line(line)
            .into_iter()
            .map(|s| (s.text, s.style))
            .collect()
    }

    #[test]
    fn test_comment_lines_are_single_span() {
        assert_eq!(
            styles("//* JOB EXEC 123"),
            vec![("//* JOB EXEC 123".to_string(), Style::Comment)]
        );
        assert_eq!(styles("/*"), vec![("/*".to_string(), Style::Comment)]);
        assert!(highlight_line("").is_empty());
    }

    #[test]
    fn test_statement_spans() {
        let got = styles("//STEP01   EXEC PGM=IEFBR14,REGION=4M");
        assert!(got.contains(&("EXEC".to_string(), Style::Keyword)));
        assert!(got.contains(&("PGM".to_string(), Style::Parameter)));
        assert!(got.contains(&("REGION".to_string(), Style::Parameter)));
        // program names are not keywords and merge into surrounding plain text
        assert!(got.contains(&("=IEFBR14,".to_string(), Style::Plain)));
    }

    #[test]
    fn test_strings_dsn_and_numbers() {
        let got = styles("//IN DD DSN=MY.DATA(MEM1),DISP=SHR,LRECL=80,NAME='a b'");
        assert!(got.contains(&("DSN".to_string(), Style::Parameter)));
        assert!(got.contains(&("MY.DATA(MEM1)".to_string(), Style::DatasetName)));
        assert!(got.contains(&("SHR".to_string(), Style::Parameter)));
        assert!(got.contains(&("80".to_string(), Style::Number)));
        assert!(got.contains(&("'a b'".to_string(), Style::String)));
    }

    #[test]
    fn test_unterminated_quote_is_plain() {
        let got = styles("//a'b");
        assert!(got.iter().all(|(_, s)| *s == Style::Plain));
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn test_spans_reassemble_line() {
        for line in [
            "//MYJOB    JOB (ACCT,123),'MY JOB NAME',",
            "//OUTPUT   DD DSN=&&TEMP,DISP=(NEW,PASS)",
            "  DEFINE CLUSTER -  \u{e9}t\u{e9}",
            "//         IF (STEP01.RC = 0) THEN",
        ] {
            let joined: String = highlight_line(line).into_iter().map(|s| s.text).collect();
            assert_eq!(joined, line);
        }
    }

    #[test]
    fn test_highlight_splits_lines() {
        let out = highlight("//A JOB\r\n//*x");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].last().map(|s| s.text.as_str()), Some("JOB"));
        assert_eq!(out[1][0].style, Style::Comment);
    }
}
