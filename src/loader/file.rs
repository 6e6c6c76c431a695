//! Filesystem document loader

use super::{parse_document, DocumentLoader};
use crate::config::Settings;
use crate::domain::ConfigNode;
use crate::error::{CfgStackError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads documents from a list of search directories.
///
/// For each directory in order, the identifier is tried verbatim and then
/// with each implicit extension appended. The first file that exists wins.
#[derive(Debug, Clone)]
pub struct FileLoader {
    search_paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let defaults = Settings::default();
        Self { search_paths: vec![base_dir.into()], extensions: defaults.extensions }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self { search_paths: settings.search_paths.clone(), extensions: settings.extensions.clone() }
    }

    pub fn search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Every path that would be tried for `identifier`, in order.
    pub fn candidates(&self, identifier: &str) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        for dir in &self.search_paths {
            candidates.push(dir.join(identifier));
            for ext in &self.extensions {
                candidates.push(dir.join(format!("{identifier}.{ext}")));
            }
        }
        candidates
    }

    /// The first existing file for `identifier`.
    pub fn locate(&self, identifier: &str) -> Result<PathBuf> {
        let candidates = self.candidates(identifier);
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Ok(path.clone()),
            None => Err(CfgStackError::DocumentNotFound {
                identifier: identifier.to_string(),
                candidates,
            }),
        }
    }
}

impl DocumentLoader for FileLoader {
    fn load(&self, identifier: &str) -> Result<ConfigNode> {
        let path = self.locate(identifier)?;
        tracing::debug!("Loading document '{}' from {}", identifier, path.display());
        load_path(identifier, &path)
    }
}

fn load_path(identifier: &str, path: &Path) -> Result<ConfigNode> {
    let text = fs::read_to_string(path)
        .map_err(|source| CfgStackError::Io { identifier: identifier.to_string(), source })?;
    parse_document(identifier, &text)
}
