// templates/pages/listing_details.rs

use crate::auth::Session;
use crate::domain::Listing;
use crate::templates::{desktop_layout, listing_card};
use maud::{html, Markup};

pub fn listing_details_page(
    session: Option<&Session>,
    listing: &Listing,
    similar: &[&Listing],
) -> Markup {
    let city_name = listing
        .city
        .as_ref()
        .and_then(|c| c.name.as_deref())
        .unwrap_or("");

    desktop_layout(
        "Listing details",
        session,
        html! {
            main class="container" {
                a href="/" class="back-link" { "← Back to listings" }

                article class="listing-details" {
                    div class="details-image" {
                        @if let Some(image) = &listing.image {
                            img src=(image) alt="listing photo";
                        }
                        span class="card-badge" {
                            @if listing.is_rental() { "For rent" } @else { "For sale" }
                        }
                    }

                    div class="details-body" {
                        h1 class="details-price" {
                            @match listing.price {
                                Some(price) => { (price) " ₾" }
                                None => { "Price on request" }
                            }
                        }
                        p class="details-address" {
                            (city_name) ", " (listing.address.as_deref().unwrap_or(""))
                        }
                        ul class="details-facts" {
                            @if let Some(area) = listing.area { li { "Area: " (area) " m²" } }
                            @if let Some(bedrooms) = listing.bedrooms { li { "Bedrooms: " (bedrooms) } }
                            @if let Some(zip) = &listing.zip_code { li { "Zip: " (zip) } }
                        }
                        @if let Some(description) = &listing.description {
                            p class="details-description" { (description) }
                        }

                        @if let Some(agent) = &listing.agent {
                            section class="agent-card" {
                                @if let Some(avatar) = &agent.avatar {
                                    img class="agent-avatar" src=(avatar) alt="agent";
                                }
                                div {
                                    p class="agent-name" { (agent.full_name()) }
                                    @if let Some(email) = &agent.email { p { (email) } }
                                    @if let Some(phone) = &agent.phone { p { (phone) } }
                                }
                            }
                        }

                        @if session.is_some() {
                            form method="post"
                                action=(format!("/listing/{}/delete", listing.id))
                                onsubmit="return confirm('Delete this listing?');" {
                                button type="submit" class="danger" { "Delete listing" }
                            }
                        }
                    }
                }

                @if !similar.is_empty() {
                    section class="similar-listings" {
                        h2 { "Similar listings in this region" }
                        div class="carousel" {
                            @for other in similar {
                                (listing_card(other))
                            }
                        }
                    }
                }
            }
        },
    )
}
