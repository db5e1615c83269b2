//! Engine options with TOML preset support.
//!
//! Fold animation, pose motion and the startup session are configured here.
//! Options serialize to/from TOML so presets can be kept next to the
//! application.

mod fold;
mod pose;
mod session;

use std::path::Path;

pub use fold::FoldOptions;
pub use pose::PoseOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use session::SessionOptions;

use crate::error::CubeNetError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[fold]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Fold animation parameters.
    pub fold: FoldOptions,
    /// Pose change motion profile.
    pub pose: PoseOptions,
    /// Startup net, base cell, orientation and placement.
    pub session: SessionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CubeNetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CubeNetError> {
        toml::from_str(content)
            .map_err(|e| CubeNetError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CubeNetError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeNetError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
