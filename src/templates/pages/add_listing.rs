// templates/pages/add_listing.rs

use crate::auth::Session;
use crate::domain::{Agent, City, Region};
use crate::forms::listing_form::ListingDraft;
use crate::forms::FieldErrors;
use crate::templates::components::image_picker;
use crate::templates::{desktop_layout, field_error};
use maud::{html, Markup};

pub fn add_listing_page(
    session: Option<&Session>,
    regions: &[Region],
    cities: &[City],
    agents: &[Agent],
    draft: &ListingDraft,
    errors: Option<&FieldErrors>,
    submit_error: Option<&str>,
) -> Markup {
    desktop_layout(
        "Add listing",
        session,
        html! {
            main class="container narrow" {
                h1 { "Add listing" }

                @if let Some(message) = submit_error {
                    p class="form-error" { (message) }
                }

                form method="post" action="/add-listing" {
                    fieldset {
                        legend { "Sale or rental" }
                        label { input type="radio" name="is_rental" value="0"
                            checked[draft.is_rental != "1"]; "For sale" }
                        label { input type="radio" name="is_rental" value="1"
                            checked[draft.is_rental == "1"]; "For rent" }
                    }

                    fieldset {
                        legend { "Location" }
                        label { "Address"
                            input type="text" name="address" value=(draft.address);
                        }
                        (field_error(errors, "address"))

                        label { "Zip code"
                            input type="text" name="zip_code" value=(draft.zip_code);
                        }
                        (field_error(errors, "zip_code"))

                        label { "Region"
                            select name="region_id" {
                                option value="" { "Choose a region" }
                                @for region in regions {
                                    option value=(region.id)
                                        selected[draft.region_id == region.id.to_string()] {
                                        (region.name.as_deref().unwrap_or("—"))
                                    }
                                }
                            }
                        }
                        (field_error(errors, "region_id"))

                        label { "City"
                            select name="city_id" {
                                option value="" { "Choose a city" }
                                @for city in cities {
                                    option value=(city.id)
                                        selected[draft.city_id == city.id.to_string()]
                                        data-region=(city.region_id.map(|id| id.to_string()).unwrap_or_default()) {
                                        (city.name.as_deref().unwrap_or("—"))
                                    }
                                }
                            }
                        }
                        (field_error(errors, "city_id"))
                    }

                    fieldset {
                        legend { "Details" }
                        label { "Price"
                            input type="text" name="price" value=(draft.price);
                        }
                        (field_error(errors, "price"))

                        label { "Area, m²"
                            input type="text" name="area" value=(draft.area);
                        }
                        (field_error(errors, "area"))

                        label { "Bedrooms"
                            input type="text" name="bedrooms" value=(draft.bedrooms);
                        }
                        (field_error(errors, "bedrooms"))

                        label { "Description"
                            textarea name="description" rows="5" { (draft.description) }
                        }
                        (field_error(errors, "description"))

                        (image_picker("image_data", "Photo"))
                        (field_error(errors, "image"))
                    }

                    fieldset {
                        legend { "Agent" }
                        label { "Agent"
                            select name="agent_id" {
                                option value="" { "Choose an agent" }
                                @for agent in agents {
                                    option value=(agent.id)
                                        selected[draft.agent_id == agent.id.to_string()] {
                                        (agent.full_name())
                                    }
                                }
                            }
                        }
                        (field_error(errors, "agent_id"))
                        p { a href="/add-agent" { "Add an agent" } }
                    }

                    div class="form-actions" {
                        a href="/" { "Cancel" }
                        button type="submit" { "Add listing" }
                    }
                }
            }
        },
    )
}
