//! Directive resolution
//!
//! Turns a raw document tree into a directive-free tree by applying, at every
//! mapping in level order:
//! 1. `_include_`: each listed document is resolved on its own, then merged in
//! 2. `_default_`: the default mapping is inherited by every mapping sibling
//!
//! Precedence (highest first): local value > later include > earlier include >
//! default.

use crate::domain::{ConfigNode, ConfigValue, Scalar, DEFAULT_KEY, INCLUDE_KEY};
use crate::error::{CfgStackError, Result};
use crate::loader::DocumentLoader;
use std::collections::VecDeque;

pub struct MergeEngine<'a> {
    loader: &'a dyn DocumentLoader,
}

impl<'a> MergeEngine<'a> {
    pub fn new(loader: &'a dyn DocumentLoader) -> Self {
        Self { loader }
    }

    /// Load `identifier` and resolve it, including everything it includes.
    pub fn resolve_document(&self, identifier: &str) -> Result<ConfigNode> {
        self.resolve_chained(identifier, &mut Vec::new())
    }

    /// Resolve an in-memory tree. Includes are still fetched through the loader.
    pub fn resolve(&self, root: ConfigNode) -> Result<ConfigNode> {
        self.resolve_tree(root, &mut Vec::new())
    }

    fn resolve_chained(&self, identifier: &str, chain: &mut Vec<String>) -> Result<ConfigNode> {
        if chain.iter().any(|seen| seen == identifier) {
            let mut cycle = chain.clone();
            cycle.push(identifier.to_string());
            return Err(CfgStackError::IncludeCycle { chain: cycle });
        }

        let root = self.loader.load(identifier)?;
        chain.push(identifier.to_string());
        let resolved = self.resolve_tree(root, chain);
        chain.pop();
        resolved
    }

    fn resolve_tree(&self, mut root: ConfigNode, chain: &mut Vec<String>) -> Result<ConfigNode> {
        // Paths from the root; children are queued behind everything already
        // pending, so a parent's directives always run before its children's.
        let mut worklist: VecDeque<Vec<String>> = VecDeque::from([Vec::new()]);
        let mut processed = 0usize;

        while let Some(path) = worklist.pop_front() {
            let Some(node) = node_at_mut(&mut root, &path) else {
                continue;
            };

            self.apply_includes(node, chain)?;
            apply_default(node);

            for (key, value) in node.iter() {
                if value.is_mapping() {
                    let mut child = path.clone();
                    child.push(key.clone());
                    worklist.push_back(child);
                }
            }
            processed += 1;
        }

        tracing::debug!(
            "Resolved tree ({} mappings) for {}",
            processed,
            chain.last().map(String::as_str).unwrap_or("<in-memory>")
        );
        Ok(root)
    }

    fn apply_includes(&self, node: &mut ConfigNode, chain: &mut Vec<String>) -> Result<()> {
        let Some(directive) = node.remove(INCLUDE_KEY) else {
            return Ok(());
        };

        let ConfigValue::Sequence(entries) = directive else {
            tracing::warn!("Ignoring {} that is not a list", INCLUDE_KEY);
            return Ok(());
        };

        for entry in entries {
            let ConfigValue::Scalar(Scalar::String(identifier)) = entry else {
                tracing::warn!("Skipping non-string {} entry", INCLUDE_KEY);
                continue;
            };
            tracing::debug!("Including '{}'", identifier);
            let included = self.resolve_chained(&identifier, chain)?;
            absorb_included(node, included);
        }
        Ok(())
    }
}

/// Merge a resolved document's top level into `node`.
///
/// A mapping over an existing local mapping becomes the included mapping
/// overlaid by the local one. Any other included value replaces the local value.
fn absorb_included(node: &mut ConfigNode, included: ConfigNode) {
    for (key, value) in included {
        let merged = match (node.get(&key), value) {
            (Some(ConfigValue::Mapping(local)), ConfigValue::Mapping(base)) => {
                ConfigValue::Mapping(base.overlaid_with(local))
            }
            (_, value) => value,
        };
        node.insert(key, merged);
    }
}

/// Overlay every mapping sibling of `_default_` onto a copy of the default.
fn apply_default(node: &mut ConfigNode) {
    let Some(directive) = node.remove(DEFAULT_KEY) else {
        return;
    };

    let ConfigValue::Mapping(defaults) = directive else {
        tracing::warn!("Ignoring {} that is not a mapping", DEFAULT_KEY);
        return;
    };

    tracing::debug!("Applying {} with {} keys", DEFAULT_KEY, defaults.len());
    for value in node.values_mut() {
        if let ConfigValue::Mapping(sibling) = value {
            let local = std::mem::take(sibling);
            let mut inherited = defaults.clone();
            inherited.overlay(local);
            *sibling = inherited;
        }
    }
}

fn node_at_mut<'n>(root: &'n mut ConfigNode, path: &[String]) -> Option<&'n mut ConfigNode> {
    path.iter().try_fold(root, |node, key| node.child_mut(key))
}
