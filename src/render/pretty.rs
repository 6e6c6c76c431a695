//! Human-readable and JSON dumps.

use crate::domain::{ConfigNode, ConfigValue, Scalar};
use serde_json::{Map, Value};

/// Pretty dump with keys sorted at every level.
pub fn render_pretty(node: &ConfigNode) -> String {
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(&sorted_object(node)).unwrap_or_default()
}

/// JSON dump in document key order.
pub fn render_json(node: &ConfigNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

fn sorted_json(value: &ConfigValue) -> Value {
    match value {
        ConfigValue::Scalar(Scalar::Null) => Value::Null,
        ConfigValue::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        ConfigValue::Scalar(Scalar::Integer(i)) => Value::from(*i),
        // NaN and infinities have no JSON form and fall back to null.
        ConfigValue::Scalar(Scalar::Float(f)) => Value::from(*f),
        ConfigValue::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        ConfigValue::Sequence(items) => Value::Array(items.iter().map(sorted_json).collect()),
        ConfigValue::Mapping(child) => sorted_object(child),
    }
}

fn sorted_object(node: &ConfigNode) -> Value {
    let mut entries: Vec<(String, Value)> =
        node.iter().map(|(k, v)| (k.clone(), sorted_json(v))).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Value::Object(entries.into_iter().collect::<Map<String, Value>>())
}
