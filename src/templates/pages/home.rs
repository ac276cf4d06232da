// templates/pages/home.rs

use crate::auth::Session;
use crate::domain::{FilterCriteria, Listing, Region};
use crate::templates::{desktop_layout, filter_panel, listing_card};
use maud::{html, Markup};

pub fn home_page(
    session: Option<&Session>,
    regions: &[Region],
    criteria: Option<&FilterCriteria>,
    listings: &[&Listing],
) -> Markup {
    desktop_layout(
        "Listings",
        session,
        html! {
            main class="container" {
                (filter_panel(regions, criteria))

                @if listings.is_empty() {
                    p class="empty-state" { "No listings found for the selected filters" }
                } @else {
                    div class="listings-grid" {
                        @for listing in listings {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}
