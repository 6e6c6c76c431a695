//! In-memory document loader

use super::{parse_document, DocumentLoader};
use crate::domain::ConfigNode;
use crate::error::{CfgStackError, Result};
use std::collections::HashMap;

/// Serves documents from a table of identifier -> YAML text.
///
/// Each load parses the text again, so every caller gets an independent tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(identifier, text);
        self
    }

    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(identifier.into(), text.into());
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, identifier: &str) -> Result<ConfigNode> {
        let text = self.documents.get(identifier).ok_or_else(|| {
            CfgStackError::DocumentNotFound { identifier: identifier.to_string(), candidates: Vec::new() }
        })?;
        tracing::debug!("Loading in-memory document '{}'", identifier);
        parse_document(identifier, text)
    }
}
