use serde::{Deserialize, Serialize};

/// A single joke as returned by the jokes API.
///
/// The API names the joke text `value`; it is exposed here as `text`.
/// Any other fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JokeRecord {
    id: String,
    #[serde(rename = "value")]
    text: String,
}

impl JokeRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
