//! User-generated entry models.
//!
//! Mood entries, journal entries, and meditation session records are
//! immutable once created; the client never updates or deletes them. The
//! `createdAt` field is assigned server-side, so it is `None` on the wire
//! when the client inserts and populated on everything read back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A selectable mood option (label plus glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub label: &'static str,
    pub emoji: &'static str,
}

/// The fixed mood options offered by the selectors.
pub const MOOD_OPTIONS: [MoodOption; 5] = [
    MoodOption { label: "happy", emoji: "😄" },
    MoodOption { label: "good", emoji: "🙂" },
    MoodOption { label: "neutral", emoji: "😐" },
    MoodOption { label: "sad", emoji: "😢" },
    MoodOption { label: "angry", emoji: "😠" },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub mood: String,
    pub emoji: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl MoodEntry {
    pub fn new(
        mood: impl Into<String>,
        emoji: impl Into<String>,
        note: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            mood: mood.into(),
            emoji: emoji.into(),
            note: note.into(),
            created_at: None,
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl JournalEntry {
    pub fn new(content: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_at: None,
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationRecord {
    pub session_name: String,
    /// Session length in minutes.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: String,
}

impl MeditationRecord {
    pub fn new(
        session_name: impl Into<String>,
        duration: u32,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            session_name: session_name.into(),
            duration,
            created_at: None,
            user_id: user_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_entry_wire_shape_omits_pending_timestamp() {
        let entry = MoodEntry::new("happy", "😄", "", "u-1");
        let wire = serde_json::to_value(&entry).unwrap();
        assert_eq!(wire["mood"], "happy");
        assert_eq!(wire["userId"], "u-1");
        assert!(wire.get("createdAt").is_none());
    }

    #[test]
    fn test_mood_entry_parses_server_fields() {
        let entry: MoodEntry = serde_json::from_str(
            r#"{"mood": "sad", "emoji": "😢", "userId": "u-1",
                "createdAt": "2026-08-07T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(entry.created_at.is_some());
        assert_eq!(entry.note, "");
    }

    #[test]
    fn test_mood_options_are_distinct() {
        let labels: std::collections::HashSet<_> =
            MOOD_OPTIONS.iter().map(|o| o.label).collect();
        assert_eq!(labels.len(), MOOD_OPTIONS.len());
    }
}
