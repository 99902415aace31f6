use crate::sbom_document::domain::Bom;
use crate::shared::Result;
use serde_json::Value;

/// DocumentDecoder service turning raw bytes into a [`Bom`]
///
/// Decoding is all-or-nothing. Unknown keys are ignored and missing keys
/// take their zero value, but invalid JSON, a non-object top level, or a
/// modelled field of the wrong JSON type fails the whole document.
pub struct DocumentDecoder;

impl DocumentDecoder {
    pub fn decode(bytes: &[u8]) -> Result<Bom> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;

        // serde would otherwise accept an array positionally as a struct
        if !value.is_object() {
            anyhow::bail!(
                "Top-level value must be a JSON object, found {}",
                json_type_name(&value)
            );
        }

        serde_json::from_value(value)
            .map_err(|e| anyhow::anyhow!("Document does not match the CycloneDX schema: {}", e))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
