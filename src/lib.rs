//! cfgstack: layered YAML configuration with include and default directives
//!
//! A document may pull in other documents with `_include_` and share common
//! entries between sibling mappings with `_default_`. [`CfgStack`] loads a
//! document, applies every directive at every depth, and exposes the merged,
//! directive-free tree.
//!
//! ```no_run
//! use cfgstack::CfgStack;
//!
//! let stack = CfgStack::open("settings")?;
//! if let Some(port) = stack.lookup("server.port").and_then(|v| v.as_i64()) {
//!     println!("port {port}");
//! }
//! # Ok::<(), cfgstack::CfgStackError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod merge;
pub mod render;
pub mod stack;

pub use domain::{ConfigNode, ConfigValue, Scalar, DEFAULT_KEY, INCLUDE_KEY};
pub use error::{CfgStackError, Result};
pub use loader::{DocumentLoader, FileLoader, MemoryLoader};
pub use merge::MergeEngine;
pub use stack::CfgStack;
