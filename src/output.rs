//! Output rendering for check and highlight commands.
//!
//! Supports `human` (default), `json`, and `report` (the terminal summary
//! panel). JSON shapes are composed by pure functions for testing.

use crate::config::OutputMode;
use crate::highlight::{Span, Style};
use crate::models::{LintResult, Severity};
use crate::report::{render_terminal_now, Verdict};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::{json, Value as JsonVal};
use std::io::{self, Write};

const AMBER: (u8, u8, u8) = (255, 176, 0);
const ORANGE: (u8, u8, u8) = (255, 140, 66);

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match output {
        OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(&compose_lint_json(res))?),
        OutputMode::Report => write_report(&mut out, res),
        OutputMode::Human => write_human(&mut out, res, use_colors(false)),
    }
}

/// One line per finding, then a summary line.
pub fn write_human(out: &mut dyn Write, res: &LintResult, color: bool) -> io::Result<()> {
    for fr in &res.files {
        for f in fr.report.findings() {
            let (icon, sev) = match f.severity {
                Severity::Error => ("✖", "⟦error⟧"),
                Severity::Warning => ("▲", "⟦warn⟧"),
            };
            if color {
                let (icon, sev) = match f.severity {
                    Severity::Error => (icon.red().to_string(), sev.red().bold().to_string()),
                    Severity::Warning => {
                        (icon.yellow().to_string(), sev.yellow().bold().to_string())
                    }
                };
                let loc = format!("{}:{}", fr.file, f.line);
                writeln!(out, "{} {} {} ❲{}❳ {}", icon, sev, loc.bold(), f.rule, f.message)?;
            } else {
                writeln!(
                    out,
                    "{} {} {}:{} ❲{}❳ {}",
                    icon, sev, fr.file, f.line, f.rule, f.message
                )?;
            }
        }
    }
    let summary = format!(
        "— Summary — errors={} warnings={} files={}",
        res.summary.errors, res.summary.warnings, res.summary.files
    );
    if color {
        writeln!(out, "{}", summary.bold())
    } else {
        writeln!(out, "{}", summary)
    }
}

/// Issues panel plus the terminal summary panel for each file.
pub fn write_report(out: &mut dyn Write, res: &LintResult) -> io::Result<()> {
    for (i, fr) in res.files.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", fr.file)?;
        if !fr.report.findings().is_empty() {
            writeln!(out, "Issues ({})", fr.report.findings().len())?;
            for f in fr.report.findings() {
                writeln!(out, "  Line {:<4} {:<7} {}", f.line, f.severity, f.message)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "{}", render_terminal_now(&fr.report))?;
    }
    Ok(())
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    let verdict = Verdict::from_counts(res.summary.errors, res.summary.warnings);
    json!({
        "files": res.files,
        "summary": {
            "errors": res.summary.errors,
            "warnings": res.summary.warnings,
            "files": res.summary.files,
            "verdict": verdict,
        }
    })
}

/// Print highlighted lines, ANSI-colored or as JSON spans.
pub fn print_highlight(lines: &[Vec<Span>], output: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match output {
        OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(&lines)?),
        _ => {
            let color = use_colors(false);
            for (i, spans) in lines.iter().enumerate() {
                let number = format!("{:>4}", i + 1);
                if color {
                    write!(out, "{}  ", number.bright_black())?;
                } else {
                    write!(out, "{}  ", number)?;
                }
                for s in spans {
                    write!(out, "{}", paint(s, color))?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Map a span's style to terminal colors.
pub fn paint(span: &Span, color: bool) -> String {
    if !color {
        return span.text.clone();
    }
    let t = span.text.as_str();
    match span.style {
        Style::Comment => t.bright_black().italic().to_string(),
        Style::Keyword => t.truecolor(AMBER.0, AMBER.1, AMBER.2).bold().to_string(),
        Style::Parameter => t.green().to_string(),
        Style::String => t.truecolor(ORANGE.0, ORANGE.1, ORANGE.2).to_string(),
        Style::DatasetName => t.white().bold().to_string(),
        Style::Number => t.cyan().to_string(),
        Style::Plain => t.to_string(),
    }
}
