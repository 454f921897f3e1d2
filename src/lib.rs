//! jclcheck core library.
//!
//! An advisory, line-oriented checker for z/OS JCL. Text is split into
//! lines, each line is classified, a fixed table of rules runs per line, and
//! the findings are aggregated into a `ValidationReport` with a verdict.
//!
//! High-level modules:
//! - `classify`: Line classifier (comment, JOB, DD, other statement, text).
//! - `rules`: Rule table (line length, name field, case, DD disposition, quotes).
//! - `lint`: Evaluation fold, `validate`, and the parallel multi-file runner.
//! - `report`: Aggregation, verdicts, and the terminal summary panel.
//! - `highlight`: Lexer producing styled spans for display.
//! - `templates`: Built-in sample jobs.
//! - `config`: Discovery and effective configuration resolution.
//! - `output`: Human/JSON/report printers.
//! - `cli`: CLI argument parsing (binary uses this).
//!
//! ```
//! let report = jclcheck::validate("//MYJOB JOB (ACCT),'TEST'\n//SYSPRINT DD SYSOUT=*");
//! assert!(report.is_valid());
//! ```
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod lint;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod templates;
pub mod utils;

pub use classify::classify;
pub use error::{Error, Result};
pub use lint::{evaluate, validate};
pub use models::line::{split_lines, LineKind, SourceLine};
pub use models::{Finding, RuleId, Severity};
pub use report::{aggregate, ValidationReport, Verdict};
