use crate::domain::Listing;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    let href = format!("/listing/{}", listing.id);
    let city_name = listing
        .city
        .as_ref()
        .and_then(|c| c.name.as_deref())
        .unwrap_or("");

    html! {
        a class="listing-card" href=(href) {
            div class="card-image" {
                @if let Some(image) = &listing.image {
                    img src=(image) alt="listing photo";
                }
                span class="card-badge" {
                    @if listing.is_rental() { "For rent" } @else { "For sale" }
                }
            }
            div class="card-body" {
                p class="card-price" {
                    @match listing.price {
                        Some(price) => { (price) " ₾" }
                        None => { "Price on request" }
                    }
                }
                p class="card-address" {
                    (city_name) ", " (listing.address.as_deref().unwrap_or(""))
                }
                ul class="card-facts" {
                    @if let Some(bedrooms) = listing.bedrooms {
                        li { (bedrooms) " bd" }
                    }
                    @if let Some(area) = listing.area {
                        li { (area) " m²" }
                    }
                    @if let Some(zip) = &listing.zip_code {
                        li { (zip) }
                    }
                }
            }
        }
    }
}
