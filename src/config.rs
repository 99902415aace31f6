//! Configuration file support for sbom-csv.
//!
//! Provides YAML-based defaults through `sbom-csv.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use sbom_csv::sbom_document::policies::HashPolicy;
use sbom_csv::shared::error::SbomError;
use sbom_csv::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "sbom-csv.config.yml";

/// Top-level configuration file schema. Command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default input document path
    pub input: Option<String>,
    /// Default output report path
    pub output: Option<String>,
    /// Hash column policy: "first" or "md5"
    pub hash_policy: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed hash policy; `validate_config` has already rejected bad values
    pub fn hash_policy(&self) -> Result<Option<HashPolicy>> {
        self.hash_policy
            .as_deref()
            .map(|s| s.parse::<HashPolicy>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.hash_policy() {
        return Err(SbomError::Validation {
            message: format!(
                "Invalid config: {}\n\n💡 Hint: hash_policy must be \"first\" or \"md5\".",
                e
            ),
        }
        .into());
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
