//! Application state shared across shell command handlers.

use std::sync::Arc;

use mindwell_application::{
    AuthGateway, CommunityService, JournalService, MeditationService, MoodService, ProfileService,
    UiStateStore, ViewRouter,
};
use mindwell_infrastructure::ConfigService;

pub struct AppContext {
    pub auth: Arc<AuthGateway>,
    pub state: Arc<UiStateStore>,
    pub mood: Arc<MoodService>,
    pub journal: Arc<JournalService>,
    pub meditation: Arc<MeditationService>,
    pub community: Arc<CommunityService>,
    pub profile: Arc<ProfileService>,
    pub router: Arc<ViewRouter>,
    #[allow(dead_code)]
    pub config_service: Arc<ConfigService>,
}
