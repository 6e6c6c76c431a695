//! Core configuration tree types
//!
//! A configuration document is a tree of string-keyed mappings whose values are
//! scalars, sequences, or nested mappings. Key order follows the source document.

use indexmap::IndexMap;
use serde::Serialize;

/// Key whose value lists documents to merge into the containing mapping.
pub const INCLUDE_KEY: &str = "_include_";

/// Key whose mapping value is inherited by every mapping-valued sibling.
pub const DEFAULT_KEY: &str = "_default_";

/// Whether `key` is one of the reserved directive keys.
pub fn is_directive(key: &str) -> bool {
    key == INCLUDE_KEY || key == DEFAULT_KEY
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Any value that can appear under a mapping key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Scalar(Scalar),
    Sequence(Vec<ConfigValue>),
    Mapping(ConfigNode),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Scalar(Scalar::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Scalar(Scalar::Float(f)) => Some(*f),
            ConfigValue::Scalar(Scalar::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&ConfigNode> {
        match self {
            ConfigValue::Mapping(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Scalar(Scalar::Null))
    }

    fn has_directives(&self) -> bool {
        match self {
            ConfigValue::Scalar(_) => false,
            ConfigValue::Sequence(items) => items.iter().any(ConfigValue::has_directives),
            ConfigValue::Mapping(node) => node.has_directives(),
        }
    }
}

impl From<Scalar> for ConfigValue {
    fn from(value: Scalar) -> Self {
        ConfigValue::Scalar(value)
    }
}

impl From<ConfigNode> for ConfigValue {
    fn from(value: ConfigNode) -> Self {
        ConfigValue::Mapping(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Scalar(Scalar::String(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Scalar(Scalar::Integer(value))
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Scalar(Scalar::Integer(i64::from(value)))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Scalar(Scalar::Bool(value))
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(value)
    }
}

/// An insertion-ordered mapping from string keys to values.
///
/// Equality ignores key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigNode {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        self.entries.get_mut(key)
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut ConfigValue> {
        self.entries.values_mut()
    }

    /// Mapping-valued child at `key`, if any.
    pub fn child(&self, key: &str) -> Option<&ConfigNode> {
        self.get(key).and_then(ConfigValue::as_mapping)
    }

    pub fn child_mut(&mut self, key: &str) -> Option<&mut ConfigNode> {
        match self.entries.get_mut(key) {
            Some(ConfigValue::Mapping(node)) => Some(node),
            _ => None,
        }
    }

    /// Look up a dotted path such as `root.nest.def`.
    ///
    /// Every segment but the last must name a mapping. An empty path is `None`.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next().filter(|s| !s.is_empty())?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Shallow overlay: every entry of `top` replaces the same-named entry here.
    pub fn overlay(&mut self, top: ConfigNode) {
        for (key, value) in top.entries {
            self.entries.insert(key, value);
        }
    }

    /// A copy of `self` with `top` overlaid on it.
    pub fn overlaid_with(&self, top: &ConfigNode) -> ConfigNode {
        let mut merged = self.clone();
        merged.overlay(top.clone());
        merged
    }

    /// True when a directive key appears anywhere in this tree.
    pub fn has_directives(&self) -> bool {
        self.entries.iter().any(|(key, value)| is_directive(key) || value.has_directives())
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigNode {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for ConfigNode {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigNode {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(entries: &[(&str, ConfigValue)]) -> ConfigNode {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn insert_existing_key_keeps_position() {
        let mut n = node(&[("a", 1.into()), ("b", 2.into()), ("c", 3.into())]);
        n.insert("a", "replaced");
        let keys: Vec<_> = n.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(n.get("a").and_then(ConfigValue::as_str), Some("replaced"));
    }

    #[test]
    fn remove_preserves_order_of_remaining_keys() {
        let mut n = node(&[("a", 1.into()), ("b", 2.into()), ("c", 3.into())]);
        n.remove("a");
        let keys: Vec<_> = n.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn equality_ignores_key_order() {
        let a = node(&[("x", 1.into()), ("y", 2.into())]);
        let b = node(&[("y", 2.into()), ("x", 1.into())]);
        assert_eq!(a, b);
    }

    #[test]
    fn overlay_is_shallow() {
        let mut base = node(&[
            ("keep", "base".into()),
            ("nested", node(&[("a", 1.into()), ("b", 2.into())]).into()),
        ]);
        base.overlay(node(&[("nested", node(&[("b", 3.into())]).into())]));

        assert_eq!(base.lookup("keep").and_then(ConfigValue::as_str), Some("base"));
        assert_eq!(base.lookup("nested.b").and_then(ConfigValue::as_i64), Some(3));
        assert!(base.lookup("nested.a").is_none());
    }

    #[test]
    fn overlaid_with_leaves_sources_untouched() {
        let base = node(&[("a", 1.into()), ("b", 2.into())]);
        let top = node(&[("b", 3.into())]);
        let merged = base.overlaid_with(&top);

        assert_eq!(merged, node(&[("a", 1.into()), ("b", 3.into())]));
        assert_eq!(base.get("b").and_then(ConfigValue::as_i64), Some(2));
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn lookup_walks_nested_mappings() {
        let n = node(&[(
            "root",
            node(&[("nest", node(&[("def", "test5".into())]).into())]).into(),
        )]);
        assert_eq!(n.lookup("root.nest.def").and_then(ConfigValue::as_str), Some("test5"));
        assert!(n.lookup("root.nest.def.deeper").is_none());
        assert!(n.lookup("root.missing").is_none());
        assert!(n.lookup("").is_none());
    }

    #[test]
    fn has_directives_finds_keys_inside_sequences() {
        let clean = node(&[("list", vec![ConfigValue::from(node(&[("a", 1.into())]))].into())]);
        assert!(!clean.has_directives());

        let dirty = node(&[(
            "list",
            vec![ConfigValue::from(node(&[(DEFAULT_KEY, node(&[]).into())]))].into(),
        )]);
        assert!(dirty.has_directives());
    }

    #[test]
    fn as_f64_widens_integers() {
        assert_eq!(ConfigValue::from(4).as_f64(), Some(4.0));
        assert_eq!(ConfigValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(ConfigValue::from("x").as_f64(), None);
    }
}
