//! Error types for document loading and resolution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CfgStackError {
    #[error("Document not found: '{identifier}' (tried {})", format_candidates(.candidates))]
    DocumentNotFound { identifier: String, candidates: Vec<PathBuf> },

    #[error("Failed reading document '{identifier}': {source}")]
    Io {
        identifier: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in document '{identifier}': {source}")]
    Parse {
        identifier: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Malformed document '{identifier}': {reason}")]
    MalformedDocument { identifier: String, reason: String },

    #[error("Include cycle detected: {}", .chain.join(" -> "))]
    IncludeCycle { chain: Vec<String> },

    #[error("Invalid settings file {}: {reason}", .path.display())]
    Settings { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, CfgStackError>;

fn format_candidates(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "no locations".to_string();
    }
    candidates.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
