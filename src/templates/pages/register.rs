// templates/pages/register.rs

use crate::forms::register_form::RegisterDraft;
use crate::forms::FieldErrors;
use crate::templates::{desktop_layout, field_error};
use maud::{html, Markup};

pub fn register_page(
    draft: &RegisterDraft,
    errors: Option<&FieldErrors>,
    submit_error: Option<&str>,
) -> Markup {
    desktop_layout(
        "Create account",
        None,
        html! {
            main class="container narrow" {
                h1 { "Create account" }

                @if let Some(message) = submit_error {
                    p class="form-error" { (message) }
                }

                form method="post" action="/register" {
                    label { "First name"
                        input type="text" name="first_name" value=(draft.first_name);
                    }
                    (field_error(errors, "first_name"))

                    label { "Last name"
                        input type="text" name="last_name" value=(draft.last_name);
                    }
                    (field_error(errors, "last_name"))

                    label { "Email"
                        input type="text" name="email" value=(draft.email);
                    }
                    (field_error(errors, "email"))

                    label { "Phone"
                        input type="text" name="phone" value=(draft.phone)
                            placeholder="9 digits";
                    }
                    (field_error(errors, "phone"))

                    label { "Password"
                        input type="password" name="password";
                    }
                    (field_error(errors, "password"))

                    label { "Confirm password"
                        input type="password" name="confirm_password";
                    }
                    (field_error(errors, "confirm_password"))

                    div class="form-actions" {
                        button type="submit" { "Create account" }
                    }
                }

                p { "Already have an account? " a href="/login" { "Sign in" } }
            }
        },
    )
}
