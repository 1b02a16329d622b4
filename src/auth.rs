use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config;

pub const SESSION_STORAGE_KEY: &str = "aifolio_session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
        }
    }
}

/// Client for a GoTrue-compatible auth server. Admin sign-in is optional:
/// when no server is configured at build time there is no client and the
/// login screen says so.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthClient {
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn from_env() -> Option<Self> {
        let base_url = config::auth_url()?;
        let anon_key = config::auth_anon_key()?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// URL that starts the implicit OAuth flow. The server redirects back to
    /// `redirect_to` with the session in the URL fragment.
    pub fn authorize_url(&self, provider: Provider, redirect_to: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={}&redirect_to={}&apikey={}",
            self.base_url,
            provider.as_str(),
            urlencoding::encode(redirect_to),
            urlencoding::encode(&self.anon_key),
        )
    }

    /// Sends the browser to the provider's consent screen.
    #[cfg(feature = "hydrate")]
    pub fn sign_in(&self, provider: Provider, redirect_to: &str) {
        let url = self.authorize_url(provider, redirect_to);
        if leptos::prelude::window().location().set_href(&url).is_err() {
            log::warn!("could not start oauth redirect");
        }
    }
}

/// Stored session blob. Defaults to the signed-out state so it can live in
/// local storage from first load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Unix seconds; 0 means "never recorded".
    #[serde(default)]
    pub expires_at: i64,
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        !self.access_token.is_empty() && !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at != 0 && self.expires_at <= Utc::now().timestamp()
    }
}

/// Parses the `#access_token=...&expires_at=...` fragment the auth server
/// appends after a successful sign-in. Returns `None` when the fragment holds
/// no token.
pub fn session_from_fragment(fragment: &str) -> Option<Session> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut token_type = None;
    let mut expires_at = None;
    let mut expires_in = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_string()),
            "token_type" => token_type = Some(value.to_string()),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            _ => {}
        }
    }

    let access_token = access_token.filter(|t| !t.is_empty())?;
    let expires_at = expires_at
        .or_else(|| expires_in.map(|secs| Utc::now().timestamp() + secs))
        .unwrap_or(0);

    Some(Session {
        access_token,
        token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AuthClient {
        AuthClient {
            base_url: "https://auth.example.com".to_string(),
            anon_key: "anon-key".to_string(),
        }
    }

    #[test]
    fn test_authorize_url_shape() {
        let url = client().authorize_url(Provider::Google, "http://localhost:3000/login");
        assert!(url.starts_with("https://auth.example.com/auth/v1/authorize?provider=google"));
        assert!(url.contains("redirect_to=http%3A%2F%2Flocalhost%3A3000%2Flogin"));
        assert!(url.contains("apikey=anon-key"));
    }

    #[test]
    fn test_fragment_with_expires_at() {
        let session =
            session_from_fragment("#access_token=abc123&token_type=bearer&expires_at=4102444800")
                .expect("fragment should parse");
        assert_eq!(session.access_token, "abc123");
        assert_eq!(session.token_type, "bearer");
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_fragment_expires_in_fallback() {
        let session = session_from_fragment("access_token=abc&expires_in=3600")
            .expect("fragment should parse");
        assert!(session.expires_at > Utc::now().timestamp());
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_fragment_without_token_is_none() {
        assert!(session_from_fragment("#error=access_denied").is_none());
        assert!(session_from_fragment("").is_none());
        assert!(session_from_fragment("#access_token=").is_none());
    }

    #[test]
    fn test_expired_session_is_signed_out() {
        let session = Session {
            access_token: "abc".to_string(),
            token_type: "bearer".to_string(),
            expires_at: 1,
        };
        assert!(session.is_expired());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_default_session_signed_out_not_expired() {
        let session = Session::default();
        assert!(!session.is_signed_in());
        assert!(!session.is_expired());
    }
}
