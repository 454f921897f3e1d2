//! Rule evaluation and the multi-file lint runner.
//!
//! `evaluate_with` folds the rule table over classified lines, threading the
//! single piece of cross-line state (`saw_job`) explicitly. `run_lint` reads
//! files in parallel and produces a `LintResult` with a summary.

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::models::line::{split_lines, LineKind, SourceLine};
use crate::models::{FileReport, Finding, LintResult, RuleId, Summary};
use crate::report::{aggregate, ValidationReport};
use crate::rules::{self, LineContext, RuleSet};
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Default)]
struct EvalState {
    saw_job: bool,
    lines: usize,
    findings: Vec<Finding>,
}

/// Evaluate every rule over `lines`.
pub fn evaluate(lines: &[SourceLine]) -> Vec<Finding> {
    evaluate_with(lines, &RuleSet::all())
}

/// Evaluate the enabled rules over `lines`.
///
/// Findings come out in line order; within a line they follow rule table
/// order. When at least one line was seen and none was a JOB statement, a
/// single missing-JOB error is appended at line 1.
pub fn evaluate_with(lines: &[SourceLine], rules: &RuleSet) -> Vec<Finding> {
    let state = lines
        .iter()
        .fold(EvalState::default(), |mut st, line| {
            let ctx = LineContext::new(line, classify(line.visible()));
            st.saw_job |= ctx.kind == LineKind::JobStatement;
            st.lines += 1;
            st.findings
                .extend(rules.line_rules().filter_map(|rule| (rule.check)(&ctx)));
            st
        });
    let mut findings = state.findings;
    if !state.saw_job && state.lines > 0 && rules.is_enabled(RuleId::MissingJob) {
        findings.push(rules::missing_job());
    }
    findings
}

/// Validate raw JCL text with every rule.
pub fn validate(text: &str) -> ValidationReport {
    validate_with(text, &RuleSet::all())
}

/// Validate raw JCL text with the enabled rules.
pub fn validate_with(text: &str, rules: &RuleSet) -> ValidationReport {
    aggregate(evaluate_with(&split_lines(text), rules))
}

/// Expand glob patterns relative to `root`, sorted and deduplicated.
pub fn collect_targets(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| Error::Pattern {
            pattern: pat.clone(),
            message: e.to_string(),
        })?;
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => targets.push(p),
                Ok(_) => {}
                Err(e) => warn!(pattern = %pat, error = %e, "skipping unreadable glob entry"),
            }
        }
    }
    targets.sort();
    targets.dedup();
    Ok(targets)
}

/// Path shown to the user: relative to `root` when possible.
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = if path.is_absolute() {
        pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf())
    } else {
        path.to_path_buf()
    };
    rel.to_string_lossy().to_string()
}

/// Read a file as submission text; invalid UTF-8 is still checked, lossily.
pub fn read_file(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Read a submission from `name`, or from stdin when `name` is `-`.
pub fn read_source(name: &str) -> Result<String> {
    if name != "-" {
        return read_file(Path::new(name));
    }
    let mut data = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut data)
        .map_err(|source| Error::Read {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Validate in-memory text under a display name (e.g. `-` for stdin).
pub fn check_text(name: &str, text: &str, rules: &RuleSet) -> FileReport {
    let report = validate_with(text, rules);
    debug!(
        file = name,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated"
    );
    FileReport {
        file: name.to_string(),
        report,
    }
}

/// Summarize already-validated reports.
pub fn summarize(files: Vec<FileReport>) -> LintResult {
    let summary = files.iter().fold(Summary::default(), |mut s, f| {
        s.errors += f.report.error_count();
        s.warnings += f.report.warning_count();
        s.files += 1;
        s
    });
    LintResult { files, summary }
}

/// Validate each file in `targets` in parallel.
///
/// Files that cannot be read are returned as errors and excluded from the
/// summary; results keep the order of `targets`.
pub fn run_lint(root: &Path, targets: &[PathBuf], rules: &RuleSet) -> (LintResult, Vec<Error>) {
    let per_file: Vec<Result<FileReport>> = targets
        .par_iter()
        .map(|path| -> Result<FileReport> {
            let text = read_file(path)?;
            Ok(check_text(&display_path(root, path), &text, rules))
        })
        .collect();

    let mut files = Vec::new();
    let mut errors = Vec::new();
    for item in per_file {
        match item {
            Ok(r) => files.push(r),
            Err(e) => errors.push(e),
        }
    }
    (summarize(files), errors)
}
