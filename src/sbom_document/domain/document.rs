use super::component::{Component, Hash};
use super::lenient::null_as_default;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Root of a CycloneDX JSON document.
///
/// Decoded once per run and never mutated afterwards. `components` keeps
/// the exact input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bom {
    #[serde(rename = "bomFormat", deserialize_with = "null_as_default")]
    pub bom_format: String,
    #[serde(rename = "specVersion", deserialize_with = "null_as_default")]
    pub spec_version: String,
    #[serde(rename = "serialNumber", deserialize_with = "null_as_default")]
    pub serial_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
    /// Decoded for completeness; the CSV projection does not use it
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Unix epoch when absent or `null`; chrono's `Default` is used as the
    /// zero timestamp rather than 0001-01-01
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<Tool>,
    /// The subject of the document, e.g. the scanned application
    #[serde(deserialize_with = "null_as_default")]
    pub component: Component,
}

/// Descriptor of the software that produced the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tool {
    #[serde(deserialize_with = "null_as_default")]
    pub vendor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hashes: Vec<Hash>,
}

/// Dependency edge: `bom_ref` depends on each entry of `depends_on`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dependency {
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub bom_ref: String,
    #[serde(rename = "dependsOn", deserialize_with = "null_as_default")]
    pub depends_on: Vec<String>,
}

impl Bom {
    /// Label such as "CycloneDX 1.4" for progress output
    pub fn format_label(&self) -> String {
        match (self.bom_format.is_empty(), self.spec_version.is_empty()) {
            (true, _) => "unknown format".to_string(),
            (false, true) => self.bom_format.clone(),
            (false, false) => format!("{} {}", self.bom_format, self.spec_version),
        }
    }
}
