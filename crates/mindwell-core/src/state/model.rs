//! UI state domain model.
//!
//! Non-sensitive view state that persists across launches: the active page,
//! the theme flag, and the in-progress mood selection.

use serde::{Deserialize, Serialize};

use crate::page::Page;

/// Default mood selection at first launch.
pub const DEFAULT_MOOD: &str = "neutral";
pub const DEFAULT_MOOD_EMOJI: &str = "😐";

/// UI state that persists across restarts.
///
/// Every field carries a serde default so a durable snapshot written by an
/// older build merges shallowly over the current defaults: stored fields
/// win, fields the snapshot lacks come up fresh. There is no versioning or
/// migration beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    /// Identifier of the active page (see [`Page`]). Kept as a string so an
    /// unrecognized identifier in an old snapshot degrades to a router no-op
    /// instead of failing the whole load.
    pub current_page: String,
    pub dark_mode: bool,
    pub selected_mood: String,
    pub selected_mood_emoji: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current_page: Page::Home.id().to_string(),
            dark_mode: false,
            selected_mood: DEFAULT_MOOD.to_string(),
            selected_mood_emoji: DEFAULT_MOOD_EMOJI.to_string(),
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UiState::new();
        assert_eq!(state.current_page, "homePage");
        assert!(!state.dark_mode);
        assert_eq!(state.selected_mood, "neutral");
        assert_eq!(state.selected_mood_emoji, "😐");
    }

    #[test]
    fn test_older_snapshot_merges_over_defaults() {
        // A snapshot that predates the mood-selection fields: the stored
        // fields win, the missing ones come up as defaults.
        let state: UiState =
            serde_json::from_str(r#"{"currentPage": "journalPage", "darkMode": true}"#).unwrap();
        assert_eq!(state.current_page, "journalPage");
        assert!(state.dark_mode);
        assert_eq!(state.selected_mood, "neutral");
        assert_eq!(state.selected_mood_emoji, "😐");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let state: UiState =
            serde_json::from_str(r#"{"darkMode": true, "legacyField": 3}"#).unwrap();
        assert!(state.dark_mode);
    }
}
