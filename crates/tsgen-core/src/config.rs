//! Scaffolding settings with layered precedence
//!
//! Settings are resolved from (low to high):
//! 1. Embedded defaults (`templates/defaults.yaml`, built into the binary)
//! 2. A user settings file, if one exists
//!
//! The overlay is a deep merge of YAML mappings, so a user file only needs
//! the keys it changes. Sequences are replaced, not appended.

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use tracing::debug;

const EMBEDDED_DEFAULTS: &str = include_str!("../templates/defaults.yaml");

/// Names of the external programs tsgen drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Package manager (`init`, `pkg set`, `install`)
    pub package_manager: String,
    /// Package runner used for `tsc --init`
    pub package_runner: String,
    /// Version-control tool (`init`)
    pub vcs: String,
}

/// Packages installed into the generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyConfig {
    pub runtime: Vec<String>,
    pub dev: Vec<String>,
}

/// Per-invocation output suppression
///
/// A silent command has its output captured and only surfaced on failure.
/// Interactive manifest initialization always inherits the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SilenceConfig {
    pub manifest_init: bool,
    pub manifest_update: bool,
    pub compiler_init: bool,
    pub vcs_init: bool,
    pub install: bool,
}

/// Resolved tsgen settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub tools: ToolsConfig,
    pub dependencies: DependencyConfig,
    pub silent: SilenceConfig,
    /// Run `tsc --init` before merging the compiler config
    pub compiler_init: bool,
}

impl ScaffoldConfig {
    /// Settings from the embedded defaults alone
    pub fn embedded() -> Result<Self> {
        let base: Value = serde_yaml_ng::from_str(EMBEDDED_DEFAULTS)?;
        Self::from_value(base)
    }

    /// Overlay a YAML document on top of the embedded defaults
    pub fn from_yaml_overlay(yaml: &str) -> Result<Self> {
        let base: Value = serde_yaml_ng::from_str(EMBEDDED_DEFAULTS)?;
        let overlay: Value = serde_yaml_ng::from_str(yaml)?;
        Self::from_value(merge_yaml(base, overlay))
    }

    /// Load settings, overlaying `path` when it exists
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => {
                debug!("Loading settings from {}", path);
                let content = std::fs::read_to_string(path)?;
                Self::from_yaml_overlay(&content)
                    .map_err(|e| Error::invalid_config(format!("{}: {}", path, e)))
            }
            Some(path) => {
                debug!("No settings file at {}, using defaults", path);
                Self::embedded()
            }
            None => Self::embedded(),
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tools.package_manager", &self.tools.package_manager),
            ("tools.package_runner", &self.tools.package_runner),
            ("tools.vcs", &self.tools.vcs),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid_config(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self::embedded().expect("embedded defaults.yaml is valid")
    }
}

/// Deep-merge two YAML values; `overlay` wins on conflicts
fn merge_yaml(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => merge_yaml(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Mapping(base_map)
        }
        // An empty document overlays nothing
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}
