//! Dependency assembly.
//!
//! Builds the backend clients, the local repositories, and the application
//! services, and hands the shell one [`AppContext`] to pass down.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use mindwell_application::{
    AuthGateway, CommunityService, JournalService, MeditationService, MoodService, ProfileService,
    UiStateStore, ViewRouter,
};
use mindwell_backend::{BackendConfig, RestAuthBackend, RestDocumentStore};
use mindwell_core::auth::{AuthBackend, CredentialStore, TokenCell};
use mindwell_core::state::StateRepository;
use mindwell_core::store::DocumentStore;
use mindwell_infrastructure::{ConfigService, FileCredentialStore, FileStateRepository};

use crate::app::AppContext;

pub async fn bootstrap(config_path: Option<PathBuf>) -> Result<AppContext> {
    let config_service = Arc::new(match config_path {
        Some(path) => ConfigService::at(path),
        None => ConfigService::new(),
    });
    let backend_config = BackendConfig::resolve(&config_service.get_config().backend);

    // The token cell links the auth gateway to the document client: every
    // session change updates the bearer token the store sends.
    let token_cell = TokenCell::new();
    let auth_backend: Arc<dyn AuthBackend> = Arc::new(RestAuthBackend::new(&backend_config));
    let document_store: Arc<dyn DocumentStore> =
        Arc::new(RestDocumentStore::new(&backend_config, token_cell.clone()));
    let credential_store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new()?);
    let state_repository: Arc<dyn StateRepository> = Arc::new(FileStateRepository::new()?);

    let auth = Arc::new(AuthGateway::new(
        auth_backend,
        document_store.clone(),
        credential_store,
        token_cell,
    ));
    let state = Arc::new(UiStateStore::new(state_repository));
    let mood = Arc::new(MoodService::new(
        auth.clone(),
        document_store.clone(),
        state.clone(),
    ));
    let journal = Arc::new(JournalService::new(auth.clone(), document_store.clone()));
    let meditation = Arc::new(MeditationService::new(auth.clone(), document_store.clone()));
    let community = Arc::new(CommunityService::new());
    let profile = Arc::new(ProfileService::new(auth.clone(), document_store));

    let router = Arc::new(ViewRouter::new(
        auth.clone(),
        state.clone(),
        mood.clone(),
        journal.clone(),
        meditation.clone(),
        community.clone(),
        profile.clone(),
    ));

    tracing::info!("[Bootstrap] Services wired against {}", backend_config.base_url);

    Ok(AppContext {
        auth,
        state,
        mood,
        journal,
        meditation,
        community,
        profile,
        router,
        config_service,
    })
}
