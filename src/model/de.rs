//! Serde helpers for the loosely-typed documents produced by the CMS and the editor.

use serde::{Deserialize, Deserializer};

/// `null` and absent both collapse to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// `null` and absent both mean `true`.
pub(crate) fn null_as_true<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(de)?.unwrap_or(true))
}

pub(crate) fn default_true() -> bool {
    true
}

/// Identifiers arrive either as JSON numbers or strings.
pub(crate) fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(serde_json::Number),
        Str(String),
    }

    Ok(match NumOrStr::deserialize(de)? {
        NumOrStr::Num(n) => n.to_string(),
        NumOrStr::Str(s) => s,
    })
}
