//! Common error type for JSONL loading

use std::path::PathBuf;

/// Error from loading a single JSONL file.
///
/// Carries the offending path (and line, for parse failures) so the pipeline
/// can report exactly which input aborted the run.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
    NotObject {
        path: PathBuf,
        line: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: IO: {source}", path.display()),
            Self::Json { path, line, source } => {
                write!(f, "{}:{line}: invalid JSON: {source}", path.display())
            }
            Self::NotObject { path, line } => {
                write!(f, "{}:{line}: line is not a JSON object", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NotObject { .. } => None,
        }
    }
}
