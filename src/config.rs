// src/config.rs
use crate::errors::ServerError;
use std::env;

/// Everything the app reads from the environment, resolved once at startup.
pub struct AppConfig {
    /// Base URL of the remote marketplace API, e.g. "https://api.example.com/api".
    pub api_base_url: String,
    /// Static bearer token for the listings/agents resource families.
    pub api_token: String,
    /// Base URL of the managed identity service.
    pub identity_base_url: String,
    /// API key appended to identity requests.
    pub identity_api_key: String,
    /// Address the HTML server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(Self {
            api_base_url: require("API_BASE_URL")?,
            api_token: require("API_TOKEN")?,
            identity_base_url: env::var("IDENTITY_BASE_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string()),
            identity_api_key: require("IDENTITY_API_KEY")?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, ServerError> {
    env::var(name)
        .map_err(|_| ServerError::BadRequest(format!("{name} environment variable not set")))
}
