//! Output rendering (canonical YAML, pretty dump, JSON)

pub mod pretty;
pub mod yaml;

pub use pretty::{render_json, render_pretty};
pub use yaml::{render_canonical_yaml, render_value_yaml};
