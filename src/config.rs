//!
//! Configuration document loading. A configuration file is a JSON or YAML
//! document with a top-level `rules` map from rule name to raw settings
//! value. Merging across files and `extends`-style inheritance are out of
//! scope: one document in, one set of normalized settings out.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::normalize::normalize_rule_settings;
use crate::registry::{RuleRegistry, normalize_key};
use crate::settings::RuleSettings;

/// Errors that can occur when loading a configuration document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    Io { source: io::Error, path: String },

    /// Failed to parse the configuration content (JSON or YAML)
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// A parsed configuration document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Raw per-rule settings, keyed by rule name as the user wrote it.
    #[serde(default)]
    pub rules: BTreeMap<String, Value>,

    /// Unrecognized top-level keys, kept for diagnostics.
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

impl Config {
    /// Load a configuration file, choosing the parser by extension.
    /// Unrecognized extensions try JSON first, then YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.display().to_string(),
        })?;
        let display = path.display();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str::<Config>(&content)
                .map_err(|e| ConfigError::Parse(format!("{display}: Failed to parse JSON: {e}"))),
            Some("yaml") | Some("yml") => serde_yml::from_str::<Config>(&content)
                .map_err(|e| ConfigError::Parse(format!("{display}: Failed to parse YAML: {e}"))),
            _ => serde_json::from_str::<Config>(&content)
                .or_else(|_| serde_yml::from_str::<Config>(&content))
                .map_err(|e| {
                    ConfigError::Parse(format!("{display}: Failed to parse config as JSON or YAML: {e}"))
                }),
        }
        .inspect(Config::warn_on_unknown_keys)
    }

    /// Parse a configuration document from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Config, ConfigError> {
        let config = serde_json::from_str::<Config>(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse JSON: {e}")))?;
        config.warn_on_unknown_keys();
        Ok(config)
    }

    /// Parse a configuration document from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Config, ConfigError> {
        let config = serde_yml::from_str::<Config>(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML: {e}")))?;
        config.warn_on_unknown_keys();
        Ok(config)
    }

    /// Top-level document keys that are not part of the configuration schema.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    fn warn_on_unknown_keys(&self) {
        for key in self.unknown.keys() {
            log::warn!("[WARN] Unknown top-level key in config: {key}");
        }
    }

    /// Apply the normalizer to every rule entry. Rule names are normalized;
    /// disabled rules map to `None`.
    pub fn normalize(&self, registry: &RuleRegistry) -> BTreeMap<String, Option<RuleSettings>> {
        self.rules
            .iter()
            .map(|(name, raw)| {
                let key = normalize_key(name);
                let settings = normalize_rule_settings(raw, &key, None, registry);
                (key, settings)
            })
            .collect()
    }

    /// Like [`Config::normalize`], with the disabled rules filtered out.
    pub fn enabled_rules(&self, registry: &RuleRegistry) -> BTreeMap<String, RuleSettings> {
        self.normalize(registry)
            .into_iter()
            .filter_map(|(name, settings)| settings.map(|s| (name, s)))
            .collect()
    }
}
