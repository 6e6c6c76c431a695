//! Canonical YAML dump.
//!
//! Block style, two-space indent, every key and string double-quoted.
//! Non-string scalars are written as tagged quoted scalars so that the
//! output never depends on plain-scalar type resolution.

use crate::domain::{ConfigNode, ConfigValue, Scalar};

const INDENT: usize = 2;

pub fn render_canonical_yaml(node: &ConfigNode) -> String {
    let mut out = String::new();
    if node.is_empty() {
        out.push_str("{}\n");
    } else {
        write_mapping(&mut out, node, 0);
    }
    out
}

/// Render a single value as a standalone canonical YAML document.
pub fn render_value_yaml(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Mapping(node) => render_canonical_yaml(node),
        ConfigValue::Sequence(items) if !items.is_empty() => {
            let mut out = String::new();
            write_sequence(&mut out, items, 0);
            out
        }
        ConfigValue::Sequence(_) => "[]\n".to_string(),
        ConfigValue::Scalar(scalar) => format!("{}\n", quoted_scalar(scalar)),
    }
}

fn write_mapping(out: &mut String, node: &ConfigNode, indent: usize) {
    for (key, value) in node {
        push_indent(out, indent);
        out.push_str(&quote(key));
        out.push(':');
        match value {
            ConfigValue::Mapping(child) if !child.is_empty() => {
                out.push('\n');
                write_mapping(out, child, indent + INDENT);
            }
            // Sequences under a key start at the key's own column.
            ConfigValue::Sequence(items) if !items.is_empty() => {
                out.push('\n');
                write_sequence(out, items, indent);
            }
            other => {
                out.push(' ');
                out.push_str(&inline_value(other));
                out.push('\n');
            }
        }
    }
}

fn write_sequence(out: &mut String, items: &[ConfigValue], indent: usize) {
    for item in items {
        push_indent(out, indent);
        out.push_str("- ");
        match item {
            ConfigValue::Mapping(child) if !child.is_empty() => {
                // First entry shares the dash line; the rest align under it.
                let mut nested = String::new();
                write_mapping(&mut nested, child, indent + INDENT);
                out.push_str(nested.trim_start_matches(' '));
            }
            ConfigValue::Sequence(inner) if !inner.is_empty() => {
                let mut nested = String::new();
                write_sequence(&mut nested, inner, indent + INDENT);
                out.push_str(nested.trim_start_matches(' '));
            }
            other => {
                out.push_str(&inline_value(other));
                out.push('\n');
            }
        }
    }
}

/// Scalars and empty collections.
fn inline_value(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Scalar(scalar) => quoted_scalar(scalar),
        ConfigValue::Sequence(_) => "[]".to_string(),
        ConfigValue::Mapping(_) => "{}".to_string(),
    }
}

fn quoted_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::String(s) => quote(s),
        Scalar::Integer(i) => format!("!!int {}", quote(&i.to_string())),
        Scalar::Float(f) => format!("!!float {}", quote(&format_float(*f))),
        Scalar::Bool(b) => format!("!!bool {}", quote(&b.to_string())),
        Scalar::Null => format!("!!null {}", quote("null")),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f == f64::INFINITY {
        ".inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        // Debug keeps a trailing ".0" on whole numbers.
        format!("{:?}", f)
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn push_indent(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat(' ').take(indent));
}
