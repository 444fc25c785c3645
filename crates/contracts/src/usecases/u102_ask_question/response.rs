use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /ask/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Empty when the backend omits it or sends `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,

    /// Supporting excerpt from the indexed documents; may be empty or absent
    #[serde(default)]
    pub context: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
