//! Diary entry types and entry-file loading.
//!
//! Entries are written by the diary store as a JSON array with camelCase
//! keys. Reading is lenient: a missing or null `content` becomes an empty
//! string, a missing `mood` becomes [`Mood::Unknown`] and an unrecognised one
//! is kept as [`Mood::Other`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::mood::Mood;

/// Caller-assigned entry identifier. The web store uses a millisecond
/// timestamp, other stores may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Numeric(i64),
    Text(String),
}

impl Default for EntryId {
    fn default() -> Self {
        EntryId::Text(String::new())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Numeric(id) => write!(f, "{id}"),
            EntryId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        EntryId::Numeric(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        EntryId::Text(id.to_string())
    }
}

/// A single mood-tagged diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(default)]
    pub id: EntryId,
    /// Calendar date as typed by the user (normally `YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Display-only creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DiaryEntry {
    /// Create an entry without a display timestamp.
    pub fn new(
        id: impl Into<EntryId>,
        date: impl Into<String>,
        mood: Mood,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            mood,
            content: content.into(),
            created_at: None,
        }
    }

    /// Set the display timestamp.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }
}

/// Parse a JSON array of entries.
///
/// `null` is accepted and yields no entries.
pub fn parse_entries(json: &str) -> Result<Vec<DiaryEntry>> {
    let entries: Option<Vec<DiaryEntry>> = serde_json::from_str(json)?;
    Ok(entries.unwrap_or_default())
}

/// Load entries from a JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<DiaryEntry>> {
    let raw = std::fs::read_to_string(path).map_err(|e| CoreError::EntriesLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let entries = parse_entries(&raw).map_err(|e| CoreError::EntriesLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded diary entries");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_format() {
        let json = r#"[
            {"id": 1718000000000, "date": "2024-06-10", "mood": "sad",
             "content": "Feeling drained", "createdAt": "6/10/2024, 9:00:00 AM"}
        ]"#;
        let entries = parse_entries(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, EntryId::Numeric(1718000000000));
        assert_eq!(entries[0].mood, Mood::Sad);
        assert_eq!(entries[0].created_at.as_deref(), Some("6/10/2024, 9:00:00 AM"));
    }

    #[test]
    fn test_missing_content_and_mood_default() {
        let json = r#"[{"id": "a", "date": "2024-06-10"}]"#;
        let entries = parse_entries(json).unwrap();
        assert_eq!(entries[0].content, "");
        assert_eq!(entries[0].mood, Mood::Unknown);
        assert_eq!(entries[0].id.to_string(), "a");
    }

    #[test]
    fn test_null_content_is_empty() {
        let json = r#"[{"id": 3, "date": "2024-06-10", "mood": "sad", "content": null}]"#;
        assert_eq!(parse_entries(json).unwrap()[0].content, "");
    }

    #[test]
    fn test_null_is_empty() {
        assert!(parse_entries("null").unwrap().is_empty());
    }

    #[test]
    fn test_serialize_camel_case() {
        let entry = DiaryEntry::new(7_i64, "2024-06-10", Mood::Calm, "ok").with_created_at("now");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["createdAt"], "now");
        assert_eq!(json["mood"], "calm");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_entries(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::EntriesLoad { .. }));
    }
}
