//! Auth-provider client.
//!
//! Email/password sign-in against the managed identity service, plus an
//! auth-state channel the UI subscribes to. There is no local credential
//! storage; a session lives as long as the process.

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};

const SIGN_IN_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub id_token: String,
    pub local_id: String,
}

pub struct AuthClient {
    http: reqwest::Client,
    api_key: String,
    state: watch::Sender<Option<Session>>,
}

impl AuthClient {
    pub(crate) fn new(http: reqwest::Client, api_key: String) -> Self {
        let (state, _) = watch::channel(None);
        AuthClient {
            http,
            api_key,
            state,
        }
    }

    /// Subscribe to auth-state changes. The receiver holds the current
    /// session-or-none and is notified on every sign-in and sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }

    /// Current session, if signed in.
    pub fn session(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    /// Verify an email/password pair with the provider. On success the new
    /// session is broadcast to all subscribers.
    pub async fn sign_in(&self, email: &str, password: &str) -> CoreResult<Session> {
        let response = self
            .http
            .post(SIGN_IN_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let code = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN");
            return Err(CoreError::Auth {
                code: normalize_error_code(code),
            });
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct SignInResponse {
            id_token: String,
            email: String,
            local_id: String,
        }

        let body: SignInResponse = response.json().await?;
        let session = Session {
            email: body.email,
            id_token: body.id_token,
            local_id: body.local_id,
        };
        self.state.send_replace(Some(session.clone()));
        tracing::info!(email = %session.email, "admin signed in");
        Ok(session)
    }

    /// Drop the current session and notify subscribers. No network call is
    /// needed; the provider token simply stops being used.
    pub fn sign_out(&self) {
        self.state.send_replace(None);
        tracing::info!("admin signed out");
    }
}

/// The provider sometimes appends detail after the code, e.g.
/// `TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account ...`.
fn normalize_error_code(raw: &str) -> String {
    raw.split([' ', ':'])
        .next()
        .unwrap_or(raw)
        .trim()
        .to_string()
}

/// Localized user-facing message for a provider error code, with a generic
/// fallback for unknown codes.
pub fn auth_error_message(code: &str) -> &'static str {
    match code {
        "INVALID_EMAIL" => "Geçersiz e-posta adresi",
        "USER_DISABLED" => "Bu hesap devre dışı bırakılmış",
        "EMAIL_NOT_FOUND" => "Bu e-posta ile hesap bulunamadı",
        "INVALID_PASSWORD" => "Yanlış şifre",
        "INVALID_LOGIN_CREDENTIALS" => "Geçersiz e-posta veya şifre",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Çok fazla deneme. Lütfen daha sonra tekrar deneyin",
        _ => "Bir hata oluştu. Lütfen tekrar deneyin.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map_to_localized_messages() {
        assert_eq!(auth_error_message("INVALID_PASSWORD"), "Yanlış şifre");
        assert_eq!(
            auth_error_message("EMAIL_NOT_FOUND"),
            "Bu e-posta ile hesap bulunamadı"
        );
    }

    #[test]
    fn test_unknown_code_gets_fallback() {
        assert_eq!(
            auth_error_message("SOMETHING_NEW"),
            "Bir hata oluştu. Lütfen tekrar deneyin."
        );
    }

    #[test]
    fn test_normalize_strips_detail_suffix() {
        assert_eq!(
            normalize_error_code("TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account..."),
            "TOO_MANY_ATTEMPTS_TRY_LATER"
        );
        assert_eq!(normalize_error_code("INVALID_PASSWORD"), "INVALID_PASSWORD");
    }

    #[tokio::test]
    async fn test_sign_out_broadcasts_none() {
        let client = AuthClient::new(reqwest::Client::new(), "k".to_string());
        let mut rx = client.subscribe();

        // Seed a fake session directly through the channel
        client.state.send_replace(Some(Session {
            email: "admin@example.com".to_string(),
            id_token: "tok".to_string(),
            local_id: "uid".to_string(),
        }));
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());

        client.sign_out();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
        assert!(client.session().is_none());
    }
}
