//! Shared CLI utilities.

use anyhow::{Context, Result};
use cfgstack::config::{load_settings, SettingsOverrides};
use cfgstack::{CfgStack, FileLoader};
use clap::Args;
use std::path::PathBuf;

/// Loader flags shared by every subcommand.
#[derive(Args)]
pub struct LoaderArgs {
    /// Directory to search for documents (repeatable; replaces configured search paths)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Implicit document extensions to try (comma-separated)
    #[arg(short = 'e', long = "ext", value_name = "EXTS")]
    pub extensions: Option<String>,

    /// Settings file (defaults to cfgstack.toml / cfgstack.yaml in the current directory)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl LoaderArgs {
    pub fn file_loader(&self) -> Result<FileLoader> {
        let settings = load_settings(&std::env::current_dir()?, self.config.as_deref())?;
        let overrides = SettingsOverrides {
            search_paths: (!self.dirs.is_empty()).then(|| self.dirs.clone()),
            extensions: parse_csv(&self.extensions),
        };
        Ok(FileLoader::from_settings(&overrides.apply(settings)))
    }

    pub fn resolve(&self, identifier: &str) -> Result<CfgStack> {
        let loader = self.file_loader()?;
        CfgStack::with_loader(identifier, &loader)
            .with_context(|| format!("Failed to resolve '{identifier}'"))
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}
