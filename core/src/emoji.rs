//! Emoji value type and its compact persisted record form.
//!
//! An `Emoji` is a plain value: a display name and the glyph string. Two emoji
//! are equal when both fields are equal. The persisted record is a two-field
//! JSON object `{"n": name, "e": glyph}`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered mapping of display name → glyph string.
///
/// Catalog tables, availability results and boundary payloads all use this
/// type so insertion order (the order shown in the grid) is preserved.
pub type EmojiMap = IndexMap<String, String>;

/// A single emoji: display name plus glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emoji {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "e")]
    pub glyph: String,
}

impl Emoji {
    pub fn new<N: Into<String>, G: Into<String>>(name: N, glyph: G) -> Self {
        Emoji {
            name: name.into(),
            glyph: glyph.into(),
        }
    }

    /// Serialize to the compact persisted record.
    pub fn to_record(&self) -> String {
        // Two string fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a persisted record.
    pub fn from_record(record: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(record)
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph, self.name)
    }
}

impl From<(&str, &str)> for Emoji {
    fn from((name, glyph): (&str, &str)) -> Self {
        Emoji::new(name, glyph)
    }
}
