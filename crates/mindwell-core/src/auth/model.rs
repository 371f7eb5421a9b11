//! Session domain model.
//!
//! The authenticated identity of the current user of the client. Exactly one
//! session is live per running client; it is owned by the auth gateway and
//! cleared on sign-out.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// The authenticated identity returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique user id assigned by the auth service.
    pub user_id: String,
    /// Optional display name. Absent until the sign-up chain sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub email: String,
}

impl Session {
    /// Display name with the "User" fallback used by the profile view.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("User")
    }

    /// First word of the display name, for the greeting line.
    pub fn first_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
    }

    /// Uppercased first character of the display name, `'U'` when absent.
    pub fn avatar_initial(&self) -> char {
        self.display_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Token pair issued by the auth service.
///
/// The id token authorizes backend requests; the refresh token is persisted
/// locally and exchanged on the next launch to restore the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub id_token: String,
    pub refresh_token: String,
}

/// A session together with its tokens, as returned by every auth operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub session: Session,
    pub tokens: AuthTokens,
}

/// Shared cell holding the current bearer token.
///
/// The auth gateway writes it on every session change; the document-store
/// client reads it per request. Kept as a plain `RwLock` so readers never
/// await.
#[derive(Debug, Clone, Default)]
pub struct TokenCell(Arc<RwLock<Option<String>>>);

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: Option<String>) {
        let mut guard = self.0.write().expect("token cell poisoned");
        *guard = token;
    }

    pub fn get(&self) -> Option<String> {
        self.0.read().expect("token cell poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(display_name: Option<&str>) -> Session {
        Session {
            user_id: "u-1".to_string(),
            display_name: display_name.map(str::to_string),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_display_label_fallback() {
        assert_eq!(session(None).display_label(), "User");
        assert_eq!(session(Some("Anu Sharma")).display_label(), "Anu Sharma");
    }

    #[test]
    fn test_first_name_is_first_word() {
        assert_eq!(session(Some("Anu Sharma")).first_name(), Some("Anu"));
        assert_eq!(session(None).first_name(), None);
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(session(Some("anu")).avatar_initial(), 'A');
        assert_eq!(session(None).avatar_initial(), 'U');
    }

    #[test]
    fn test_token_cell_roundtrip() {
        let cell = TokenCell::new();
        assert_eq!(cell.get(), None);
        cell.set(Some("tok".to_string()));
        assert_eq!(cell.get(), Some("tok".to_string()));
        cell.set(None);
        assert_eq!(cell.get(), None);
    }
}
