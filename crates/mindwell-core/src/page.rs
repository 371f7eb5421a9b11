//! Page identifiers and the per-page on-enter dispatch table.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::APP_NAME;

/// The fixed set of page sections of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    Mood,
    Journal,
    Meditation,
    Community,
    Profile,
}

/// The single data load a page triggers when entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLoad {
    MoodHistory,
    JournalEntries,
    /// Meditation catalog, default category.
    MeditationCatalog,
    Profile,
}

impl Page {
    /// Resolves a page identifier; `None` for identifiers with no matching
    /// page section (the router treats that as a no-op).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "homePage" => Some(Self::Home),
            "moodPage" => Some(Self::Mood),
            "journalPage" => Some(Self::Journal),
            "meditationPage" => Some(Self::Meditation),
            "communityPage" => Some(Self::Community),
            "profilePage" => Some(Self::Profile),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "homePage",
            Self::Mood => "moodPage",
            Self::Journal => "journalPage",
            Self::Meditation => "meditationPage",
            Self::Community => "communityPage",
            Self::Profile => "profilePage",
        }
    }

    /// Header title shown while the page is active.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Mood => "Mood",
            Self::Journal => "Journal",
            Self::Meditation => "Meditation",
            Self::Community => "Community",
            Self::Profile => "Profile",
        }
    }

    /// The data load dispatched on entering the page, if any.
    pub fn on_enter(&self) -> Option<DataLoad> {
        match self {
            Self::Mood => Some(DataLoad::MoodHistory),
            Self::Journal => Some(DataLoad::JournalEntries),
            Self::Meditation => Some(DataLoad::MeditationCatalog),
            Self::Profile => Some(DataLoad::Profile),
            Self::Home | Self::Community => None,
        }
    }
}

/// Header title for an identifier, falling back to the application name
/// when the identifier has no entry in the title table.
pub fn page_title(id: &str) -> &'static str {
    Page::from_id(id).map(|page| page.title()).unwrap_or(APP_NAME)
}
