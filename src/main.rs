//! jclcheck CLI binary entry point.
//! Delegates to the library for checking, highlighting, and templates.

use clap::Parser;
use jclcheck::cli::{Cli, Commands};
use jclcheck::config::{self, OutputMode};
use jclcheck::error::Error;
use jclcheck::utils::{error_prefix, note_prefix};
use jclcheck::{highlight, lint, output, templates};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("JCLCHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(err: &Error) -> ! {
    eprintln!("{} {}", error_prefix(), err);
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            files,
            repo_root,
            output,
            disable,
        } => {
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), &disable)
                .unwrap_or_else(|e| fail(&e));
            // Friendly note if no config was found
            if eff.config_file.is_none() && eff.output != OutputMode::Json {
                eprintln!("{} No jclcheck.toml found; using defaults.", note_prefix());
            }
            debug!(root = %eff.repo_root.display(), rules_off = eff.rules.disabled().count(), "resolved config");

            let mut stdin_report = None;
            let targets: Vec<PathBuf> = if files.is_empty() {
                lint::collect_targets(&eff.repo_root, &eff.patterns).unwrap_or_else(|e| fail(&e))
            } else {
                let mut paths = Vec::new();
                for f in &files {
                    if f == "-" {
                        if stdin_report.is_none() {
                            let text = lint::read_source("-").unwrap_or_else(|e| fail(&e));
                            stdin_report = Some(lint::check_text("-", &text, &eff.rules));
                        }
                    } else {
                        paths.push(PathBuf::from(f));
                    }
                }
                paths
            };
            if targets.is_empty() && stdin_report.is_none() {
                eprintln!(
                    "{} No JCL files matched patterns [{}].",
                    note_prefix(),
                    eff.patterns.join(", ")
                );
                return;
            }

            let (mut result, errors) = lint::run_lint(&eff.repo_root, &targets, &eff.rules);
            if let Some(r) = stdin_report {
                let mut files = vec![r];
                files.append(&mut result.files);
                result = lint::summarize(files);
            }
            if let Err(e) = output::print_lint(&result, eff.output) {
                eprintln!("{} {}", error_prefix(), e);
                std::process::exit(2);
            }
            for e in &errors {
                eprintln!("{} {}", error_prefix(), e);
            }
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
            if !errors.is_empty() {
                std::process::exit(2);
            }
        }
        Commands::Highlight { file, output } => {
            let mode = match output.as_deref() {
                Some(s) => s.parse().unwrap_or_else(|e| fail(&e)),
                None => OutputMode::Human,
            };
            let text = lint::read_source(&file).unwrap_or_else(|e| fail(&e));
            let lines = highlight::highlight(&text);
            if let Err(e) = output::print_highlight(&lines, mode) {
                eprintln!("{} {}", error_prefix(), e);
                std::process::exit(2);
            }
        }
        Commands::Templates { name, out } => match name {
            None => {
                for t in templates::TEMPLATES {
                    println!("{:<12} {}", t.slug, t.name);
                }
                let d = templates::DEFAULT_TEMPLATE;
                println!("{:<12} {}", d.slug, d.name);
            }
            Some(name) => {
                let t = templates::find(&name).unwrap_or_else(|e| fail(&e));
                match out {
                    Some(path) => {
                        fs::write(&path, t.code).unwrap_or_else(|source| {
                            fail(&Error::Write {
                                path: PathBuf::from(&path),
                                source,
                            })
                        });
                        let report = jclcheck::validate(t.code);
                        println!("saved: {} ({})", path, report.verdict());
                    }
                    None => println!("{}", t.code),
                }
            }
        },
    }
}
