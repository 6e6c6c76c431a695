//! Resolved configuration handle

use crate::domain::{ConfigNode, ConfigValue};
use crate::error::Result;
use crate::loader::{DocumentLoader, FileLoader};
use crate::merge::MergeEngine;
use crate::render::{render_canonical_yaml, render_json, render_pretty};
use std::fmt;

/// A configuration document with all `_include_` and `_default_` directives applied.
///
/// Built once; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CfgStack {
    identifier: String,
    data: ConfigNode,
}

impl CfgStack {
    /// Resolve `identifier` from the current directory with the default extensions.
    pub fn open(identifier: &str) -> Result<Self> {
        Self::with_loader(identifier, &FileLoader::default())
    }

    pub fn with_loader(identifier: &str, loader: &dyn DocumentLoader) -> Result<Self> {
        let data = MergeEngine::new(loader).resolve_document(identifier)?;
        Ok(Self { identifier: identifier.to_string(), data })
    }

    /// Resolve an already-parsed tree; its includes are fetched through `loader`.
    pub fn from_node(node: ConfigNode, loader: &dyn DocumentLoader) -> Result<Self> {
        let data = MergeEngine::new(loader).resolve(node)?;
        Ok(Self { identifier: String::new(), data })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn data(&self) -> &ConfigNode {
        &self.data
    }

    pub fn into_data(self) -> ConfigNode {
        self.data
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.data.get(key)
    }

    /// Dotted-path lookup, e.g. `root.nest.def`.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        self.data.lookup(path)
    }

    pub fn to_canonical_yaml(&self) -> String {
        render_canonical_yaml(&self.data)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        render_json(&self.data)
    }
}

impl fmt::Display for CfgStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_pretty(&self.data))
    }
}
