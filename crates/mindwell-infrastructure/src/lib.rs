//! Local persistence and configuration for Mindwell.
//!
//! Everything durable on the client side lives here: the UI-state snapshot,
//! the stored refresh token, and the configuration file. The hosted backend
//! collaborators are implemented in `mindwell-backend`.

pub mod atomic_json;
pub mod config_service;
pub mod credential_store;
pub mod paths;
pub mod state_repository;

pub use atomic_json::AtomicJsonFile;
pub use config_service::ConfigService;
pub use credential_store::FileCredentialStore;
pub use paths::MindwellPaths;
pub use state_repository::FileStateRepository;
