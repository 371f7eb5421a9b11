//! The fixed guided-meditation catalog.
//!
//! Five categories, two sessions each. The catalog is hard-coded; "starting"
//! a session only records it, no audio is played.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Generic title used when a category key is unrecognized.
pub const FALLBACK_TITLE: &str = "Meditation Sessions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Sleep,
    Anxiety,
    Focus,
    Stress,
    Recommended,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sleep => "Sleep Meditation",
            Self::Anxiety => "Anxiety Relief",
            Self::Focus => "Focus & Concentration",
            Self::Stress => "Stress Management",
            Self::Recommended => "Recommended Sessions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeditationSession {
    pub name: &'static str,
    pub duration_minutes: u32,
    pub description: &'static str,
}

const fn session(
    name: &'static str,
    duration_minutes: u32,
    description: &'static str,
) -> MeditationSession {
    MeditationSession {
        name,
        duration_minutes,
        description,
    }
}

static CATALOG: Lazy<HashMap<Category, Vec<MeditationSession>>> = Lazy::new(|| {
    HashMap::from([
        (
            Category::Sleep,
            vec![
                session("Deep Sleep Journey", 15, "Guided meditation for restful sleep"),
                session("Sleep Relaxation", 10, "Calm your mind before bed"),
            ],
        ),
        (
            Category::Anxiety,
            vec![
                session("Anxiety Release", 12, "Let go of anxious thoughts"),
                session("Calm Breathing", 8, "Breathing exercises for anxiety"),
            ],
        ),
        (
            Category::Focus,
            vec![
                session("Focus Enhancement", 10, "Improve concentration and focus"),
                session("Mindful Work", 15, "Meditation for productivity"),
            ],
        ),
        (
            Category::Stress,
            vec![
                session("Stress Relief", 12, "Release tension and stress"),
                session("Body Scan Relaxation", 18, "Full body relaxation technique"),
            ],
        ),
        (
            Category::Recommended,
            vec![
                session("Morning Mindfulness", 10, "Start your day with clarity"),
                session("Evening Wind Down", 12, "Perfect way to end your day"),
            ],
        ),
    ])
});

/// Sessions of a category.
pub fn sessions(category: Category) -> &'static [MeditationSession] {
    &CATALOG[&category]
}

/// A resolved catalog page: title plus session list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub title: &'static str,
    pub sessions: &'static [MeditationSession],
}

/// Looks up a category by key.
///
/// Unrecognized keys fall back to the recommended session list under the
/// generic [`FALLBACK_TITLE`]; the category-specific titles are reserved for
/// recognized keys.
pub fn lookup(key: &str) -> CatalogPage {
    match Category::from_str(key) {
        Ok(category) => CatalogPage {
            title: category.title(),
            sessions: sessions(category),
        },
        Err(_) => CatalogPage {
            title: FALLBACK_TITLE,
            sessions: sessions(Category::Recommended),
        },
    }
}

/// Finds a session by name anywhere in the catalog.
pub fn find_session(name: &str) -> Option<MeditationSession> {
    Category::iter()
        .flat_map(|category| sessions(category).iter())
        .find(|session| session.name.eq_ignore_ascii_case(name))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_two_sessions() {
        for category in Category::iter() {
            assert_eq!(sessions(category).len(), 2, "{category}");
        }
    }

    #[test]
    fn test_lookup_known_category() {
        let page = lookup("sleep");
        assert_eq!(page.title, "Sleep Meditation");
        assert_eq!(page.sessions[0].name, "Deep Sleep Journey");
        assert_eq!(page.sessions[0].duration_minutes, 15);
    }

    #[test]
    fn test_lookup_unknown_category_falls_back_to_recommended() {
        let page = lookup("zen");
        assert_eq!(page.title, FALLBACK_TITLE);
        assert_eq!(page.sessions.len(), 2);
        assert_eq!(page.sessions[0].name, "Morning Mindfulness");
        assert_eq!(page.sessions[1].name, "Evening Wind Down");
    }

    #[test]
    fn test_recommended_keeps_its_own_title() {
        // "recommended" is the only key the title table and the session
        // table share as a fallback; looked up directly it keeps its
        // category title.
        let page = lookup("recommended");
        assert_eq!(page.title, "Recommended Sessions");
    }

    #[test]
    fn test_find_session_by_name() {
        let found = find_session("Calm Breathing").unwrap();
        assert_eq!(found.duration_minutes, 8);
        assert!(find_session("Unknown Session").is_none());
    }
}
