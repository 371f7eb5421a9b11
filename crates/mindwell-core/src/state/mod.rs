//! Locally persisted UI state: model and repository port.

pub mod model;
pub mod repository;

pub use model::UiState;
pub use repository::StateRepository;
