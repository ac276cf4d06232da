// templates/pages/login.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(email: &str, submit_error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }

                @if let Some(message) = submit_error {
                    p class="form-error" { (message) }
                }

                form method="post" action="/login" {
                    label { "Email"
                        input type="text" name="email" value=(email);
                    }
                    label { "Password"
                        input type="password" name="password";
                    }
                    div class="form-actions" {
                        button type="submit" { "Sign in" }
                    }
                }

                p { "New here? " a href="/register" { "Create an account" } }
            }
        },
    )
}
