//! Authentication domain: the current session and the auth-service port.

pub mod backend;
pub mod model;

pub use backend::{AuthBackend, CredentialStore};
pub use model::{AuthTokens, AuthenticatedUser, Session, TokenCell};
