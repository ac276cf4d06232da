// src/auth/identity.rs
//
// Thin client for the managed identity provider. We delegate the whole
// authentication protocol to it: account creation, password checks, and
// token issuance all happen on the provider's side.
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// What the provider tells us about a user after sign-up or sign-in.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub local_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
}

#[derive(Debug)]
pub enum IdentityError {
    Network(String),
    /// The provider's machine-readable error code, e.g. "EMAIL_EXISTS".
    Provider(String),
    Decode(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Network(msg) => write!(f, "Identity network error: {msg}"),
            IdentityError::Provider(code) => write!(f, "Identity provider error: {code}"),
            IdentityError::Decode(msg) => write!(f, "Identity decode error: {msg}"),
        }
    }
}

impl Error for IdentityError {}

impl IdentityError {
    /// The message shown on the register/login pages. Only a handful of
    /// provider codes are worth distinguishing; anything else gets the
    /// generic line.
    pub fn user_message(&self) -> &'static str {
        let IdentityError::Provider(code) = self else {
            return "Something went wrong. Please try again.";
        };

        // WEAK_PASSWORD arrives with a suffix ("WEAK_PASSWORD : ...").
        if code.starts_with("WEAK_PASSWORD") {
            return "Password is too weak";
        }
        match code.as_str() {
            "EMAIL_EXISTS" => "This email is already registered",
            "INVALID_EMAIL" => "Invalid email address",
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                "Incorrect email or password"
            }
            _ => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    /// Absent on profile updates, which we call with
    /// `returnSecureToken: false`.
    id_token: Option<String>,
    email: Option<String>,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

impl IdentityClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create the account, then set the display name in a second call;
    /// the provider has no one-shot way to do both.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        let created = self.post(
            "accounts:signUp",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )?;
        let id_token = created
            .id_token
            .ok_or_else(|| IdentityError::Decode("sign-up response missing idToken".into()))?;

        self.post(
            "accounts:update",
            json!({
                "idToken": id_token,
                "displayName": display_name,
                "returnSecureToken": false,
            }),
        )?;

        Ok(AuthenticatedUser {
            local_id: created.local_id,
            email: created.email.unwrap_or_else(|| email.to_string()),
            display_name: Some(display_name.to_string()),
            id_token,
        })
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, IdentityError> {
        let signed_in = self.post(
            "accounts:signInWithPassword",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )?;

        let id_token = signed_in
            .id_token
            .ok_or_else(|| IdentityError::Decode("sign-in response missing idToken".into()))?;

        Ok(AuthenticatedUser {
            local_id: signed_in.local_id,
            email: signed_in.email.unwrap_or_else(|| email.to_string()),
            display_name: signed_in.display_name,
            id_token,
        })
    }

    fn post(&self, operation: &str, body: serde_json::Value) -> Result<TokenResponse, IdentityError> {
        let url = format!("{}/{}?key={}", self.base_url, operation, self.api_key);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if !status.is_success() {
            if let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(&text) {
                return Err(IdentityError::Provider(parsed.error.message));
            }
            return Err(IdentityError::Network(format!(
                "identity provider HTTP {status}: {text}"
            )));
        }

        serde_json::from_str(&text).map_err(|e| IdentityError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_provider_codes_map_to_page_messages() {
        let cases = [
            ("EMAIL_EXISTS", "This email is already registered"),
            ("INVALID_EMAIL", "Invalid email address"),
            ("EMAIL_NOT_FOUND", "Incorrect email or password"),
            ("INVALID_PASSWORD", "Incorrect email or password"),
            ("INVALID_LOGIN_CREDENTIALS", "Incorrect email or password"),
            (
                "WEAK_PASSWORD : Password should be at least 6 characters",
                "Password is too weak",
            ),
        ];
        for (code, expected) in cases {
            let err = IdentityError::Provider(code.to_string());
            assert_eq!(err.user_message(), expected, "code {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_generic_message() {
        let err = IdentityError::Provider("OPERATION_NOT_ALLOWED".to_string());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn network_errors_use_generic_message() {
        let err = IdentityError::Network("timeout".to_string());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn error_body_parses_provider_code() {
        let body = r#"{"error": {"code": 400, "message": "EMAIL_EXISTS", "errors": []}}"#;
        let parsed: ProviderErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "EMAIL_EXISTS");
    }
}
