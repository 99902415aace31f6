use super::lenient::null_as_default;
use serde::Deserialize;

/// One inventory entry of a CycloneDX document.
///
/// Every field is optional on the wire: absent keys and `null` values
/// both decode to the zero value, and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Component {
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub licenses: Vec<LicenseChoice>,
    #[serde(deserialize_with = "null_as_default")]
    pub purl: String,
    #[serde(rename = "externalReferences", deserialize_with = "null_as_default")]
    pub external_references: Vec<ExternalReference>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub component_type: String,
    #[serde(rename = "bom-ref", deserialize_with = "null_as_default")]
    pub bom_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hashes: Vec<Hash>,
}

/// Entry of a component's `licenses` array: `{"license": {"id": "MIT"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LicenseChoice {
    #[serde(deserialize_with = "null_as_default")]
    pub license: License,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct License {
    /// SPDX license identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExternalReference {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub reference_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Content digest; `alg` is the CycloneDX algorithm name ("MD5", "SHA-256", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Hash {
    #[serde(deserialize_with = "null_as_default")]
    pub alg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}
