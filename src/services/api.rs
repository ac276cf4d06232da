// src/services/api.rs
use crate::services::ApiError;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared blocking client for the marketplace API. The bearer token is
/// attached per request: the listings and agents families require it, the
/// geo endpoints are public.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        authorized: bool,
    ) -> Result<T, ApiError> {
        let mut req = self.client.get(self.url(path));
        if authorized {
            req = req.bearer_auth(&self.token);
        }

        let resp = req.send().map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a multipart form (always an authorized call).
    pub fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ApiError::Status(status.as_u16(), text));
        }
        Ok(())
    }
}
