use crate::forms::FieldErrors;
use maud::{html, Markup};

/// The red line under a form field, when that field has a problem.
pub fn field_error(errors: Option<&FieldErrors>, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.and_then(|e| e.get(field)) {
            p class="field-error" { (message) }
        }
    }
}
