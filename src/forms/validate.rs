// src/forms/validate.rs
//
// Field-level validation rules for the create/register forms. All pure;
// nothing invalid gets as far as the remote API.

/// Per-field validation failures, in the order the fields were checked.
#[derive(Debug, Default, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Digits only. The UI's numeric fields accept nothing else.
pub fn is_numeric(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && v.chars().all(|c| c.is_ascii_digit())
}

pub fn min_words(value: &str, min: usize) -> bool {
    value.split_whitespace().count() >= min
}

/// Minimal email shape check: one `@` with non-empty sides and a dot in
/// the domain.
pub fn is_email(value: &str) -> bool {
    let v = value.trim();
    let Some((local, domain)) = v.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.chars().count() >= 2,
        None => false,
    }
}

/// Agency mailboxes only.
pub fn has_email_domain(value: &str, domain: &str) -> bool {
    value.trim().ends_with(domain)
}

/// Georgian mobile number: "5" followed by eight digits.
pub fn is_mobile_phone(value: &str) -> bool {
    let v = value.trim();
    v.len() == 9 && v.starts_with('5') && v.chars().all(|c| c.is_ascii_digit())
}

/// Any nine digits. The registration form is laxer than the agent form.
pub fn is_nine_digit_phone(value: &str) -> bool {
    let v = value.trim();
    v.len() == 9 && v.chars().all(|c| c.is_ascii_digit())
}

/// At least one uppercase, one lowercase and one digit.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
}
