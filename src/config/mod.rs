//! Loader settings
//!
//! Search paths and implicit extensions for the filesystem loader, read from a
//! settings file with CLI flags taking precedence (CLI > File > Defaults).

pub mod loader;

pub use loader::{load_settings, SettingsOverrides};

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directories searched, in order, for included documents.
    pub search_paths: Vec<PathBuf>,
    /// Extensions tried after the bare identifier, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from(".")],
            extensions: vec!["yaml".to_string(), "yml".to_string()],
        }
    }
}

/// Trim, strip a leading dot, and drop empty entries.
pub fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}
