//! Auth Gateway use case.
//!
//! Wraps the auth-service port, owns the single live [`Session`], keeps the
//! document-store bearer token current, and publishes session changes on a
//! watch channel (the shell's analogue of an upstream auth-state listener).

use std::sync::Arc;

use mindwell_core::auth::{
    AuthBackend, AuthTokens, AuthenticatedUser, CredentialStore, Session, TokenCell,
};
use mindwell_core::error::{MindwellError, Result};
use mindwell_core::profile::ProfileAggregate;
use mindwell_core::store::{DocumentStore, collections};
use tokio::sync::{RwLock, watch};

pub struct AuthGateway {
    backend: Arc<dyn AuthBackend>,
    store: Arc<dyn DocumentStore>,
    credentials: Arc<dyn CredentialStore>,
    token_cell: TokenCell,
    session: Arc<RwLock<Option<Session>>>,
    tokens: Arc<RwLock<Option<AuthTokens>>>,
    session_tx: watch::Sender<Option<Session>>,
}

impl AuthGateway {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        store: Arc<dyn DocumentStore>,
        credentials: Arc<dyn CredentialStore>,
        token_cell: TokenCell,
    ) -> Self {
        let (session_tx, _) = watch::channel(None);
        Self {
            backend,
            store,
            credentials,
            token_cell,
            session: Arc::new(RwLock::new(None)),
            tokens: Arc::new(RwLock::new(None)),
            session_tx,
        }
    }

    /// Subscribes to session-change notifications. The current value is
    /// `None` until a sign-in or restore succeeds.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub async fn require_session(&self) -> Result<Session> {
        self.current_session()
            .await
            .ok_or_else(|| MindwellError::auth("Not signed in"))
    }

    /// Signs in with an email/password credential.
    ///
    /// Both fields must be non-empty (checked client-side only); the
    /// backend's own failure message is passed through for display.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(MindwellError::validation("Please fill in all fields"));
        }

        let user = self.backend.sign_in(email, password).await?;
        self.adopt(user).await
    }

    /// Creates an account, names it, and seeds its profile aggregate.
    ///
    /// Three chained backend calls with no rollback: a failure partway
    /// leaves whatever the backend already committed.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(MindwellError::validation("Please fill in all fields"));
        }
        if password.chars().count() < 6 {
            return Err(MindwellError::validation(
                "Password must be at least 6 characters",
            ));
        }

        let user = self.backend.create_account(email, password).await?;
        let tokens = user.tokens.clone();
        self.adopt(user).await?;

        let session = self.backend.set_display_name(&tokens, name).await?;
        self.publish(Some(session.clone())).await;

        let profile = ProfileAggregate::initial(name, email);
        self.store
            .upsert(
                collections::USERS,
                &session.user_id,
                serde_json::to_value(&profile)?,
            )
            .await?;

        Ok(session)
    }

    /// Revokes the session upstream and clears all local traces of it.
    pub async fn sign_out(&self) -> Result<()> {
        let tokens = self.tokens.write().await.take();
        if let Some(tokens) = tokens {
            if let Err(e) = self.backend.revoke(&tokens).await {
                tracing::warn!("[Auth] Upstream sign-out failed: {}", e);
            }
        }

        if let Err(e) = self.credentials.clear().await {
            tracing::warn!("[Auth] Failed to clear stored credentials: {}", e);
        }

        self.token_cell.set(None);
        self.publish(None).await;
        Ok(())
    }

    /// Restores the session from the stored refresh token, if any.
    ///
    /// Invoked once at startup; this decides which view the shell shows at
    /// launch. A rejected token is discarded so the next launch goes
    /// straight to the auth view.
    pub async fn restore_session(&self) -> Result<Option<Session>> {
        let Some(refresh_token) = self.credentials.load().await? else {
            return Ok(None);
        };

        match self.backend.refresh_session(&refresh_token).await {
            Ok(user) => {
                tracing::info!("[Auth] Session restored for {}", user.session.email);
                Ok(Some(self.adopt(user).await?))
            }
            Err(e) => {
                tracing::info!("[Auth] Stored session rejected: {}", e);
                if let Err(e) = self.credentials.clear().await {
                    tracing::warn!("[Auth] Failed to clear stored credentials: {}", e);
                }
                Ok(None)
            }
        }
    }

    /// Adopts an authenticated user as the live session.
    async fn adopt(&self, user: AuthenticatedUser) -> Result<Session> {
        *self.tokens.write().await = Some(user.tokens.clone());
        self.token_cell.set(Some(user.tokens.id_token.clone()));

        if let Err(e) = self.credentials.save(&user.tokens.refresh_token).await {
            tracing::warn!("[Auth] Failed to persist refresh token: {}", e);
        }

        self.publish(Some(user.session.clone())).await;
        Ok(user.session)
    }

    async fn publish(&self, session: Option<Session>) {
        *self.session.write().await = session.clone();
        let _ = self.session_tx.send(session);
    }
}
