//! View models emitted by the application layer.
//!
//! The core emits data; a rendering layer binds it to whatever surface is in
//! use. These types are serializable so any shell (terminal, webview, test
//! harness) can consume them.

use serde::Serialize;

use mindwell_core::entries::MOOD_OPTIONS;

/// How long an error notice stays visible before auto-hiding.
pub const ERROR_NOTICE_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Seconds until the message hides itself; `None` means it stays until
    /// the next render.
    pub auto_hide_secs: Option<u64>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            auto_hide_secs: None,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            auto_hide_secs: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            auto_hide_secs: Some(ERROR_NOTICE_SECS),
        }
    }
}

/// Result of loading an entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListView<T> {
    /// No entries yet; render the empty placeholder.
    Empty,
    /// The fetch failed; render the error placeholder.
    Error,
    Rows(Vec<T>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRow {
    pub emoji: String,
    /// Capitalized mood title, e.g. "Happy Mood".
    pub title: String,
    pub timestamp: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRow {
    pub title: String,
    pub timestamp: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRow {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    /// Label for the start control, e.g. "Start (10m)".
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationView {
    pub title: String,
    pub sessions: Vec<SessionRow>,
}

/// Which mood selector is being operated: the home-page one or the
/// mood-page one. Functionally identical, visually independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorScope {
    Home,
    MoodPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodOptionView {
    pub label: String,
    pub emoji: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSelectorView {
    pub scope: SelectorScope,
    pub options: Vec<MoodOptionView>,
}

impl MoodSelectorView {
    /// Builds the selector with the option matching `selected` marked
    /// active among its siblings.
    pub fn with_selection(scope: SelectorScope, selected: &str) -> Self {
        Self {
            scope,
            options: MOOD_OPTIONS
                .iter()
                .map(|option| MoodOptionView {
                    label: option.label.to_string(),
                    emoji: option.emoji.to_string(),
                    active: option.label == selected,
                })
                .collect(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.options.iter().filter(|option| option.active).count()
    }
}

/// Theme state plus the two visual affordances mirroring it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeView {
    pub dark_mode: bool,
    /// Header toggle icon: "sun" while dark, "moon" while light.
    pub icon: &'static str,
    pub checkbox_checked: bool,
}

impl ThemeView {
    pub fn for_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            icon: if dark_mode { "sun" } else { "moon" },
            checkbox_checked: dark_mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCounters {
    pub mood_entries: i64,
    pub journal_entries: i64,
    pub meditation_sessions: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub avatar_initial: char,
    /// `None` when the aggregate fetch failed (logged, not surfaced).
    pub counters: Option<ProfileCounters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityView {
    pub chips: Vec<ChipView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub greeting: String,
    pub date_line: String,
    pub selector: MoodSelectorView,
}

/// A fully resolved page, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub id: &'static str,
    pub title: &'static str,
    pub content: PageContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum PageContent {
    Home(HomeView),
    Mood {
        selector: MoodSelectorView,
        history: ListView<MoodRow>,
    },
    Journal(ListView<JournalRow>),
    Meditation(MeditationView),
    Community(CommunityView),
    /// `None` when no session is live.
    Profile(Option<ProfileView>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_auto_hides() {
        let notice = Notice::error("nope");
        assert_eq!(notice.auto_hide_secs, Some(ERROR_NOTICE_SECS));
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_success_notice_stays() {
        assert_eq!(Notice::success("ok").auto_hide_secs, None);
    }

    #[test]
    fn test_selector_marks_exactly_one_active() {
        let view = MoodSelectorView::with_selection(SelectorScope::Home, "happy");
        assert_eq!(view.active_count(), 1);
        let active: Vec<_> = view.options.iter().filter(|o| o.active).collect();
        assert_eq!(active[0].label, "happy");
    }

    #[test]
    fn test_selector_without_selection_has_no_active() {
        let view = MoodSelectorView::with_selection(SelectorScope::MoodPage, "");
        assert_eq!(view.active_count(), 0);
    }

    #[test]
    fn test_theme_view_mirrors_mode() {
        let dark = ThemeView::for_mode(true);
        assert_eq!(dark.icon, "sun");
        assert!(dark.checkbox_checked);

        let light = ThemeView::for_mode(false);
        assert_eq!(light.icon, "moon");
        assert!(!light.checkbox_checked);
    }
}
