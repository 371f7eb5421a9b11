//! Community feed - an explicit placeholder surface.
//!
//! Loading only moves the active category chip; posting validates, confirms,
//! and discards. Nothing is fetched, persisted, or transmitted.

use mindwell_core::error::{MindwellError, Result};

use crate::view::{ChipView, CommunityView, Notice};

/// The fixed category chips.
pub const CATEGORIES: [&str; 4] = ["all", "support", "stories", "tips"];

#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityService;

impl CommunityService {
    pub fn new() -> Self {
        Self
    }

    /// Activates the chosen category chip. No posts are fetched in this
    /// version; there is no backing collection.
    pub fn load_posts(&self, category: &str) -> CommunityView {
        CommunityView {
            chips: CATEGORIES
                .iter()
                .map(|label| ChipView {
                    label: label.to_string(),
                    active: *label == category,
                })
                .collect(),
        }
    }

    /// Accepts a post, confirms, and drops the content.
    pub fn create_post(&self, content: &str) -> Result<Notice> {
        if content.trim().is_empty() {
            return Err(MindwellError::validation("Please write something to share"));
        }

        Ok(Notice::success("Post shared to community!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_posts_activates_one_chip() {
        let view = CommunityService::new().load_posts("support");
        let active: Vec<_> = view.chips.iter().filter(|chip| chip.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "support");
    }

    #[test]
    fn test_unknown_category_activates_nothing() {
        let view = CommunityService::new().load_posts("gossip");
        assert!(view.chips.iter().all(|chip| !chip.active));
    }

    #[test]
    fn test_blank_post_rejected() {
        let err = CommunityService::new().create_post("  ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please write something to share");
    }

    #[test]
    fn test_post_confirms_without_persisting() {
        let notice = CommunityService::new().create_post("hello world").unwrap();
        assert_eq!(notice.text, "Post shared to community!");
    }
}
