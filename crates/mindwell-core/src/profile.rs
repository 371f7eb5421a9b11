//! Per-user profile aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counter field names in the stored profile document, used by the atomic
/// increment issued alongside each entry insert.
pub const COUNTER_MOOD: &str = "moodEntries";
pub const COUNTER_JOURNAL: &str = "journalEntries";
pub const COUNTER_MEDITATION: &str = "meditationSessions";

/// Per-user summary document, keyed by user id in the `users` collection.
///
/// The counters are maintained by server-side increments committed in the
/// same batch as the entry inserts; each one defaults to 0 when absent from
/// the stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAggregate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mood_entries: i64,
    #[serde(default)]
    pub journal_entries: i64,
    #[serde(default)]
    pub meditation_sessions: i64,
}

impl ProfileAggregate {
    /// The zero-counter document written by the sign-up chain.
    pub fn initial(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            created_at: None,
            mood_entries: 0,
            journal_entries: 0,
            meditation_sessions: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_profile_is_zeroed() {
        let profile = ProfileAggregate::initial("Anu", "a@x.com");
        assert_eq!(profile.mood_entries, 0);
        assert_eq!(profile.journal_entries, 0);
        assert_eq!(profile.meditation_sessions, 0);
    }

    #[test]
    fn test_absent_counters_default_to_zero() {
        let profile: ProfileAggregate =
            serde_json::from_str(r#"{"name": "Anu", "email": "a@x.com"}"#).unwrap();
        assert_eq!(profile.mood_entries, 0);
        assert_eq!(profile.journal_entries, 0);
        assert_eq!(profile.meditation_sessions, 0);
    }

    #[test]
    fn test_wire_counter_names() {
        let wire = serde_json::to_value(ProfileAggregate::initial("Anu", "a@x.com")).unwrap();
        assert!(wire.get(COUNTER_MOOD).is_some());
        assert!(wire.get(COUNTER_JOURNAL).is_some());
        assert!(wire.get(COUNTER_MEDITATION).is_some());
    }
}
