// src/forms/agent_form.rs
use crate::forms::image::ImageUpload;
use crate::forms::validate::{self, FieldErrors};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct AgentDraft {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub avatar_data: String,
}

#[derive(Debug)]
pub struct AgentSubmission {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub avatar: ImageUpload,
}

impl AgentDraft {
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            surname: field("surname"),
            email: field("email"),
            phone: field("phone"),
            avatar_data: field("avatar_data"),
        }
    }

    pub fn validate(&self) -> Result<AgentSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        if !validate::min_len(&self.name, 2) {
            errors.push("name", "Name must be at least 2 characters");
        }
        if !validate::min_len(&self.surname, 2) {
            errors.push("surname", "Surname must be at least 2 characters");
        }

        // Agents sign up with their agency mailbox only.
        if !validate::is_email(&self.email) || !validate::has_email_domain(&self.email, "@redberry.ge")
        {
            errors.push("email", "Email must be a valid @redberry.ge address");
        }

        if !validate::is_mobile_phone(&self.phone) {
            errors.push("phone", "Phone must be 5XXXXXXXX");
        }

        let avatar = match ImageUpload::from_data_url(&self.avatar_data) {
            Ok(avatar) => Some(avatar),
            Err(message) => {
                errors.push("avatar", message);
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AgentSubmission {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            avatar: avatar.unwrap(),
        })
    }
}
