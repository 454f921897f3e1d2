//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jclcheck",
    version,
    about = "Advisory JCL syntax checker",
    long_about = "jclcheck — a small, fast linter and highlighter for z/OS JCL.\n\nChecks are advisory: line length, name field length, uppercase convention, DD disposition, quote balance, and presence of a JOB statement.\n\nConfiguration precedence: CLI > jclcheck.toml > defaults.",
    after_help = "Examples:\n  jclcheck check jobs/payroll.jcl\n  jclcheck check --output json\n  cat job.jcl | jclcheck check -\n  jclcheck highlight jobs/payroll.jcl\n  jclcheck templates sort --out sort.jcl",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, short, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current jclcheck version.")]
    Version,
    /// Validate JCL files
    #[command(
        about = "Run syntax checks",
        long_about = "Validate JCL files (or stdin with '-'). Without files, the configured glob patterns are used. Exits 1 when any error finding exists.",
        after_help = "Examples:\n  jclcheck check a.jcl b.jcl\n  jclcheck check --disable uppercase --output report"
    )]
    Check {
        #[arg(help = "Files to check; '-' reads stdin")]
        files: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json|report (default: human)")]
        output: Option<String>,
        #[arg(long = "disable", value_name = "RULE", help = "Disable a rule by id (repeatable)")]
        disable: Vec<String>,
    },
    /// Print syntax-highlighted JCL
    #[command(
        about = "Highlight JCL",
        long_about = "Print a JCL file with ANSI colors and line numbers, or its token spans as JSON."
    )]
    Highlight {
        #[arg(help = "File to highlight; '-' reads stdin")]
        file: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// List, print, or save sample jobs
    #[command(
        about = "Sample jobs",
        long_about = "Without NAME, list templates. With NAME, print the template or save it verbatim with --out.",
        after_help = "Examples:\n  jclcheck templates\n  jclcheck templates idcams\n  jclcheck templates default --out job.jcl"
    )]
    Templates {
        #[arg(help = "Template slug or name ('default' for the starter job)")]
        name: Option<String>,
        #[arg(long, help = "Write the template to this path instead of stdout")]
        out: Option<String>,
    },
}
