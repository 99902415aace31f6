use serde::{Deserialize, Deserializer};

/// Decodes an explicit JSON `null` as the type's zero value.
///
/// Paired with a container-level `#[serde(default)]`, which covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
