//! Configuration discovery and effective settings resolution.
//!
//! jclcheck reads `jclcheck.toml|yaml|yml` from the repository root (or the
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `patterns`: `["**/*.jcl"]`
//! - `rules.disabled`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::models::RuleId;
use crate::rules::RuleSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

pub const CONFIG_FILES: [&str; 3] = ["jclcheck.toml", "jclcheck.yaml", "jclcheck.yml"];
pub const DEFAULT_PATTERN: &str = "**/*.jcl";

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule switches under `[rules]`.
pub struct RulesCfg {
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `jclcheck.toml|yaml`.
pub struct CheckConfig {
    pub output: Option<String>,
    pub patterns: Option<Vec<String>>,
    #[serde(default)]
    pub rules: Option<RulesCfg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How results are printed.
pub enum OutputMode {
    Human,
    Json,
    Report,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            "report" => Ok(OutputMode::Report),
            other => Err(Error::UnknownOutput(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_file: Option<PathBuf>,
    pub output: OutputMode,
    pub patterns: Vec<String>,
    pub rules: RuleSet,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `jclcheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `CheckConfig` from the first config file present under `root`.
///
/// Returns `Ok(None)` when there is no config file; a file that exists but
/// cannot be read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, CheckConfig)>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let cfg: CheckConfig = if name.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| Error::Config {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&s).map_err(|e| Error::Config {
                path: path.clone(),
                message: e.to_string(),
            })?
        };
        debug!(path = %path.display(), "loaded config");
        return Ok(Some((path, cfg)));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Rules disabled on the command line are added to those disabled in config.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_disabled: &[String],
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_file, cfg) = match load_config(&repo_root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, CheckConfig::default()),
    };

    let output = match cli_output.map(str::to_string).or(cfg.output) {
        Some(s) => s.parse()?,
        None => OutputMode::Human,
    };

    let patterns = cfg
        .patterns
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()]);

    let disabled = cfg
        .rules
        .unwrap_or_default()
        .disabled
        .iter()
        .chain(cli_disabled.iter())
        .map(|s| s.parse::<RuleId>())
        .collect::<Result<Vec<_>>>()?;

    Ok(Effective {
        repo_root,
        config_file,
        output,
        patterns,
        rules: RuleSet::without(disabled),
    })
}
