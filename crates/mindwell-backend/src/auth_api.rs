//! REST client for the hosted authentication service.

use std::time::Duration;

use async_trait::async_trait;
use mindwell_core::auth::{AuthBackend, AuthTokens, AuthenticatedUser, Session};
use mindwell_core::error::{MindwellError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Auth service client.
#[derive(Clone)]
pub struct RestAuthBackend {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAccountRequest<'a> {
    display_name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    user_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInfoResponse {
    user_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<AccountResponse> for AuthenticatedUser {
    fn from(response: AccountResponse) -> Self {
        Self {
            session: Session {
                user_id: response.user_id,
                display_name: response.display_name,
                email: response.email,
            },
            tokens: AuthTokens {
                id_token: response.id_token,
                refresh_token: response.refresh_token,
            },
        }
    }
}

impl RestAuthBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Attaches the project API key to a request.
    fn api_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(api_key) = &self.api_key {
            request.header("X-Api-Key", api_key)
        } else {
            request
        }
    }

    async fn send_credential(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.api_request(
            self.client
                .post(&url)
                .json(&CredentialRequest { email, password })
                .timeout(REQUEST_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                let account: AccountResponse = response
                    .json()
                    .await
                    .map_err(|e| MindwellError::backend(e.to_string()))?;
                Ok(account.into())
            }
            Ok(response) => Err(MindwellError::auth(read_error(response).await)),
            Err(e) => Err(MindwellError::auth(e.to_string())),
        }
    }
}

#[async_trait]
impl AuthBackend for RestAuthBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.send_credential("/v1/sessions", email, password).await
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.send_credential("/v1/accounts", email, password).await
    }

    async fn set_display_name(&self, tokens: &AuthTokens, display_name: &str) -> Result<Session> {
        let url = format!("{}/v1/accounts/me", self.base_url);
        let request = self.api_request(
            self.client
                .patch(&url)
                .bearer_auth(&tokens.id_token)
                .json(&UpdateAccountRequest { display_name })
                .timeout(REQUEST_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                let account: AccountInfoResponse = response
                    .json()
                    .await
                    .map_err(|e| MindwellError::backend(e.to_string()))?;
                Ok(Session {
                    user_id: account.user_id,
                    display_name: account.display_name,
                    email: account.email,
                })
            }
            Ok(response) => Err(MindwellError::auth(read_error(response).await)),
            Err(e) => Err(MindwellError::auth(e.to_string())),
        }
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthenticatedUser> {
        let url = format!("{}/v1/sessions:refresh", self.base_url);
        let request = self.api_request(
            self.client
                .post(&url)
                .json(&RefreshRequest { refresh_token })
                .timeout(REQUEST_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                let account: AccountResponse = response
                    .json()
                    .await
                    .map_err(|e| MindwellError::backend(e.to_string()))?;
                tracing::debug!("[AuthApi] Session restored for {}", account.email);
                Ok(account.into())
            }
            Ok(response) => Err(MindwellError::auth(read_error(response).await)),
            Err(e) => Err(MindwellError::auth(e.to_string())),
        }
    }

    async fn revoke(&self, tokens: &AuthTokens) -> Result<()> {
        let url = format!("{}/v1/sessions/current", self.base_url);
        let request = self.api_request(
            self.client
                .delete(&url)
                .bearer_auth(&tokens.id_token)
                .timeout(REQUEST_TIMEOUT),
        );

        match request.send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(MindwellError::auth(read_error(response).await)),
            Err(e) => Err(MindwellError::auth(e.to_string())),
        }
    }
}

/// Extracts the service's error message from a failed response.
///
/// The service reports `{"error": {"message": ...}}`; that message is what
/// gets surfaced to the user. Anything else degrades to the raw body or a
/// generic placeholder.
pub(crate) async fn read_error(response: reqwest::Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_response_into_user() {
        let response: AccountResponse = serde_json::from_str(
            r#"{"userId": "u-1", "email": "a@x.com", "displayName": "Anu",
                "idToken": "id", "refreshToken": "rt"}"#,
        )
        .unwrap();
        let user: AuthenticatedUser = response.into();
        assert_eq!(user.session.user_id, "u-1");
        assert_eq!(user.session.display_name.as_deref(), Some("Anu"));
        assert_eq!(user.tokens.refresh_token, "rt");
    }

    #[test]
    fn test_account_response_without_display_name() {
        let response: AccountResponse = serde_json::from_str(
            r#"{"userId": "u-1", "email": "a@x.com", "idToken": "id", "refreshToken": "rt"}"#,
        )
        .unwrap();
        let user: AuthenticatedUser = response.into();
        assert_eq!(user.session.display_name, None);
    }
}
