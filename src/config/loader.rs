//! Settings file loading

use super::{normalize_extensions, Settings};
use crate::error::{CfgStackError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI-level overrides; `None` leaves the file (or default) value in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub search_paths: Option<Vec<PathBuf>>,
    pub extensions: Option<Vec<String>>,
}

impl SettingsOverrides {
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(paths) = self.search_paths {
            settings.search_paths = paths;
        }
        if let Some(extensions) = self.extensions {
            settings.extensions = normalize_extensions(extensions);
        }
        settings
    }
}

/// Load settings from `explicit` or, failing that, from a file discovered in `dir`.
///
/// An explicitly named file must parse. A broken auto-discovered file is
/// reported with a warning and defaults are used instead. Relative search
/// paths are resolved against the directory holding the settings file.
pub fn load_settings(dir: &Path, explicit: Option<&Path>) -> Result<Settings> {
    let explicit_provided = explicit.is_some();

    let discovered = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(dir),
    };

    let Some(settings_file) = discovered else {
        return Ok(Settings::default());
    };

    match read_settings(&settings_file) {
        Ok(settings) => Ok(settings),
        Err(e) if !explicit_provided => {
            tracing::warn!("Ignoring auto-discovered settings {}: {}", settings_file.display(), e);
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}

fn read_settings(settings_file: &Path) -> Result<Settings> {
    let invalid = |reason: String| CfgStackError::Settings { path: settings_file.to_path_buf(), reason };

    let content = fs::read_to_string(settings_file).map_err(|e| invalid(e.to_string()))?;
    let ext = settings_file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let mut settings: Settings = match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| invalid(e.to_string()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| invalid(e.to_string()))?,
        other => return Err(invalid(format!("unsupported settings extension '.{other}'"))),
    };

    settings.extensions = normalize_extensions(&settings.extensions);
    let base = settings_file.parent().unwrap_or_else(|| Path::new("."));
    settings.search_paths = settings
        .search_paths
        .into_iter()
        .map(|p| if p.is_absolute() { p } else { base.join(p) })
        .collect();

    tracing::debug!("Loaded settings from {}", settings_file.display());
    Ok(settings)
}

fn discover_settings(dir: &Path) -> Option<PathBuf> {
    let candidates =
        ["cfgstack.toml", ".cfgstack.toml", "cfgstack.yaml", ".cfgstack.yaml", "cfgstack.yml"];

    candidates.iter().map(|candidate| dir.join(candidate)).find(|path| path.is_file())
}
