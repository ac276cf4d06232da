// src/services/agents.rs
use crate::domain::Agent;
use crate::forms::agent_form::AgentSubmission;
use crate::services::{ApiClient, ApiError};
use reqwest::blocking::multipart::{Form, Part};

/// Wrapper over the `/agents` resource family.
#[derive(Clone)]
pub struct AgentsApi {
    api: ApiClient,
}

impl AgentsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self) -> Result<Vec<Agent>, ApiError> {
        self.api.get_json("/agents", true)
    }

    pub fn create(&self, submission: &AgentSubmission) -> Result<Agent, ApiError> {
        let avatar = Part::bytes(submission.avatar.bytes.clone())
            .file_name(submission.avatar.file_name.clone())
            .mime_str(&submission.avatar.content_type)
            .map_err(|e| ApiError::Network(format!("bad avatar content type: {e}")))?;

        let form = Form::new()
            .text("name", submission.name.clone())
            .text("surname", submission.surname.clone())
            .text("email", submission.email.clone())
            .text("phone", submission.phone.clone())
            .part("avatar", avatar);

        self.api.post_multipart("/agents", form)
    }
}
