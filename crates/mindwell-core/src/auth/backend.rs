//! Auth service port.

use async_trait::async_trait;

use crate::auth::model::{AuthTokens, AuthenticatedUser, Session};
use crate::error::Result;

/// Capability set of the hosted authentication service.
///
/// Implementations are opaque request/response clients; callers never see
/// transport details. Failures carry the backend's own message so it can be
/// surfaced to the user verbatim.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Signs in with an email/password credential.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser>;

    /// Creates a new account with an email/password credential.
    async fn create_account(&self, email: &str, password: &str) -> Result<AuthenticatedUser>;

    /// Sets the display name of the account the tokens belong to.
    async fn set_display_name(&self, tokens: &AuthTokens, display_name: &str) -> Result<Session>;

    /// Exchanges a stored refresh token for a fresh session.
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthenticatedUser>;

    /// Revokes the session upstream (sign-out).
    async fn revoke(&self, tokens: &AuthTokens) -> Result<()>;
}

/// Durable storage for the refresh token, enabling session restoration
/// across launches.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>>;

    async fn save(&self, refresh_token: &str) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
