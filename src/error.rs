//! Host-level errors.
//!
//! Findings about JCL text are data, not errors; the checker itself never
//! fails. These variants cover what the surrounding CLI can trip over:
//! reading inputs, loading configuration, and resolving names.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("bad glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("unknown output mode '{0}'")]
    UnknownOutput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = Error::Read {
            path: PathBuf::from("jobs/a.jcl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("jobs/a.jcl"));
        assert!(msg.contains("gone"));
    }
}
