// src/forms/register_form.rs
use crate::forms::validate::{self, FieldErrors};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct RegisterDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug)]
pub struct RegisterSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegisterSubmission {
    /// The identity provider stores one display name, not two name fields.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl RegisterDraft {
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).cloned().unwrap_or_default();
        Self {
            first_name: field("first_name"),
            last_name: field("last_name"),
            email: field("email"),
            phone: field("phone"),
            password: field("password"),
            confirm_password: field("confirm_password"),
        }
    }

    pub fn validate(&self) -> Result<RegisterSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        if !validate::min_len(&self.first_name, 2) {
            errors.push("first_name", "First name must be at least 2 characters");
        }
        if !validate::min_len(&self.last_name, 2) {
            errors.push("last_name", "Last name must be at least 2 characters");
        }
        if !validate::is_email(&self.email) {
            errors.push("email", "Please enter a valid email");
        }
        if !validate::is_nine_digit_phone(&self.phone) {
            errors.push("phone", "Phone must be 9 digits");
        }

        if self.password.chars().count() < 6 {
            errors.push("password", "Password must be at least 6 characters");
        } else if !validate::is_strong_password(&self.password) {
            errors.push(
                "password",
                "Password must contain uppercase, lowercase, and number",
            );
        }

        if self.password != self.confirm_password {
            errors.push("confirm_password", "Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
