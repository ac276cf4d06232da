// templates/pages/add_agent.rs

use crate::auth::Session;
use crate::forms::agent_form::AgentDraft;
use crate::forms::FieldErrors;
use crate::templates::components::image_picker;
use crate::templates::{desktop_layout, field_error};
use maud::{html, Markup};

pub fn add_agent_page(
    session: Option<&Session>,
    draft: &AgentDraft,
    errors: Option<&FieldErrors>,
    submit_error: Option<&str>,
) -> Markup {
    desktop_layout(
        "Add agent",
        session,
        html! {
            main class="container narrow" {
                h1 { "Add agent" }

                @if let Some(message) = submit_error {
                    p class="form-error" { (message) }
                }

                form method="post" action="/add-agent" {
                    label { "Name"
                        input type="text" name="name" value=(draft.name);
                    }
                    (field_error(errors, "name"))

                    label { "Surname"
                        input type="text" name="surname" value=(draft.surname);
                    }
                    (field_error(errors, "surname"))

                    label { "Email"
                        input type="text" name="email" value=(draft.email)
                            placeholder="name@redberry.ge";
                    }
                    (field_error(errors, "email"))

                    label { "Phone"
                        input type="text" name="phone" value=(draft.phone)
                            placeholder="5XXXXXXXX";
                    }
                    (field_error(errors, "phone"))

                    (image_picker("avatar_data", "Avatar"))
                    (field_error(errors, "avatar"))

                    div class="form-actions" {
                        a href="/add-listing" { "Cancel" }
                        button type="submit" { "Add agent" }
                    }
                }
            }
        },
    )
}
