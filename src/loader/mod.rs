//! Document loading
//!
//! A [`DocumentLoader`] turns a document identifier into a parsed root mapping.
//! How identifiers map to storage is up to the loader; the merge engine only
//! ever asks for "the document named X".

pub mod file;
pub mod memory;

pub use file::FileLoader;
pub use memory::MemoryLoader;

use crate::domain::{ConfigNode, ConfigValue, Scalar};
use crate::error::{CfgStackError, Result};
use serde_yaml::Value;

pub trait DocumentLoader {
    /// Load and parse the document named `identifier`.
    ///
    /// Fails with [`CfgStackError::MalformedDocument`] when the document root
    /// is not a mapping.
    fn load(&self, identifier: &str) -> Result<ConfigNode>;
}

/// Parse YAML text into a root mapping.
pub fn parse_document(identifier: &str, text: &str) -> Result<ConfigNode> {
    let parse_error =
        |source| CfgStackError::Parse { identifier: identifier.to_string(), source };
    let mut raw: Value = serde_yaml::from_str(text).map_err(parse_error)?;
    // `<<: *anchor` merge keys are expanded before conversion.
    raw.apply_merge().map_err(parse_error)?;

    match convert_value(identifier, raw)? {
        ConfigValue::Mapping(node) => Ok(node),
        other => Err(CfgStackError::MalformedDocument {
            identifier: identifier.to_string(),
            reason: format!("top-level value is {}, expected a mapping", describe(&other)),
        }),
    }
}

fn convert_value(identifier: &str, value: Value) -> Result<ConfigValue> {
    Ok(match value {
        Value::Null => Scalar::Null.into(),
        Value::Bool(b) => Scalar::Bool(b).into(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Scalar::Integer(i).into(),
            // u64 beyond i64::MAX, or a real float
            None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)).into(),
        },
        Value::String(s) => Scalar::String(s).into(),
        Value::Sequence(items) => ConfigValue::Sequence(
            items.into_iter().map(|item| convert_value(identifier, item)).collect::<Result<_>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut node = ConfigNode::new();
            for (key, value) in mapping {
                node.insert(convert_key(identifier, key)?, convert_value(identifier, value)?);
            }
            ConfigValue::Mapping(node)
        }
        Value::Tagged(tagged) => convert_value(identifier, tagged.value)?,
    })
}

fn convert_key(identifier: &str, key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => convert_key(identifier, tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(CfgStackError::MalformedDocument {
            identifier: identifier.to_string(),
            reason: "mapping keys must be scalars".to_string(),
        }),
    }
}

fn describe(value: &ConfigValue) -> &'static str {
    match value {
        ConfigValue::Scalar(Scalar::Null) => "empty",
        ConfigValue::Scalar(_) => "a scalar",
        ConfigValue::Sequence(_) => "a sequence",
        ConfigValue::Mapping(_) => "a mapping",
    }
}
