//! View Router use case.
//!
//! Resolves page identifiers, records the active page in UI state, and
//! dispatches the single on-enter data load each page declares.

use std::sync::Arc;

use chrono::{Local, Timelike};
use mindwell_core::page::Page;
use mindwell_core::timefmt::{greeting, long_date};

use crate::auth_gateway::AuthGateway;
use crate::community::CommunityService;
use crate::journal::JournalService;
use crate::meditation::MeditationService;
use crate::mood::MoodService;
use crate::profile::ProfileService;
use crate::state_store::UiStateStore;
use crate::view::{HomeView, PageContent, PageView, SelectorScope};

/// Default category shown when entering the meditation page.
const DEFAULT_CATEGORY: &str = "recommended";
/// Chip active when entering the community page.
const DEFAULT_COMMUNITY_CATEGORY: &str = "all";

pub struct ViewRouter {
    auth: Arc<AuthGateway>,
    state: Arc<UiStateStore>,
    mood: Arc<MoodService>,
    journal: Arc<JournalService>,
    meditation: Arc<MeditationService>,
    community: Arc<CommunityService>,
    profile: Arc<ProfileService>,
}

impl ViewRouter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth: Arc<AuthGateway>,
        state: Arc<UiStateStore>,
        mood: Arc<MoodService>,
        journal: Arc<JournalService>,
        meditation: Arc<MeditationService>,
        community: Arc<CommunityService>,
        profile: Arc<ProfileService>,
    ) -> Self {
        Self {
            auth,
            state,
            mood,
            journal,
            meditation,
            community,
            profile,
        }
    }

    /// Activates the page matching `id` and returns it fully loaded.
    ///
    /// `None` when the identifier has no matching page section - a no-op,
    /// nothing is persisted and nothing loads.
    pub async fn show_page(&self, id: &str) -> Option<PageView> {
        let page = Page::from_id(id)?;

        if let Err(e) = self.state.set_current_page(id).await {
            tracing::warn!("[Router] Failed to persist page change: {}", e);
        }

        let content = match page {
            Page::Home => PageContent::Home(self.home_view().await),
            Page::Mood => PageContent::Mood {
                selector: self.mood.selector(SelectorScope::MoodPage).await,
                history: self.mood.load_history().await,
            },
            Page::Journal => PageContent::Journal(self.journal.load_entries().await),
            Page::Meditation => {
                PageContent::Meditation(self.meditation.load_sessions(DEFAULT_CATEGORY))
            }
            Page::Community => {
                PageContent::Community(self.community.load_posts(DEFAULT_COMMUNITY_CATEGORY))
            }
            Page::Profile => PageContent::Profile(self.profile.load().await),
        };

        Some(PageView {
            id: page.id(),
            title: page.title(),
            content,
        })
    }

    /// Re-renders whatever page the UI state says is active.
    pub async fn current_page(&self) -> Option<PageView> {
        let id = self.state.snapshot().await.current_page;
        self.show_page(&id).await
    }

    async fn home_view(&self) -> HomeView {
        let session = self.auth.current_session().await;
        let now = Local::now();
        let first_name = session.as_ref().and_then(|s| s.first_name().map(str::to_string));

        HomeView {
            greeting: greeting(now.hour(), first_name.as_deref()),
            date_line: long_date(now.date_naive()),
            selector: self.mood.selector(SelectorScope::Home).await,
        }
    }
}
