use crate::auth::Session;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, session: Option<&Session>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { h3 { "Estate Front" } }
                    nav {
                        ul {
                            li { a href="/" { "Listings" } }
                            @if session.is_some() {
                                li { a href="/add-listing" { "Add listing" } }
                                li { a href="/add-agent" { "Add agent" } }
                            }
                        }
                    }
                    @match session {
                        Some(user) => {
                            div class="inline" {
                                span class="user-name" { (user.display_name) }
                                form method="post" action="/logout" class="inline" {
                                    button type="submit" class="link-button" { "Log out" }
                                }
                            }
                        }
                        None => {
                            div class="inline" {
                                a href="/register" { "Create Account" }
                                a href="/login" { button { "Sign In" } }
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
