// src/forms/listing_form.rs
use crate::forms::image::ImageUpload;
use crate::forms::validate::{self, FieldErrors};
use std::collections::HashMap;

/// Raw create-listing form exactly as posted, kept as strings so the page
/// can re-render what the user typed next to any validation errors.
#[derive(Debug, Default, Clone)]
pub struct ListingDraft {
    pub address: String,
    pub region_id: String,
    pub city_id: String,
    pub zip_code: String,
    pub price: String,
    pub area: String,
    pub bedrooms: String,
    pub description: String,
    pub is_rental: String,
    pub agent_id: String,
    pub image_data: String,
}

/// A draft that passed every rule, parsed into what the API call needs.
#[derive(Debug)]
pub struct ListingSubmission {
    pub address: String,
    pub region_id: i64,
    pub city_id: i64,
    pub zip_code: String,
    pub price: i64,
    pub area: i64,
    pub bedrooms: i64,
    pub description: String,
    pub is_rental: i64,
    pub agent_id: i64,
    pub image: ImageUpload,
}

impl ListingDraft {
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).cloned().unwrap_or_default();
        Self {
            address: field("address"),
            region_id: field("region_id"),
            city_id: field("city_id"),
            zip_code: field("zip_code"),
            price: field("price"),
            area: field("area"),
            bedrooms: field("bedrooms"),
            description: field("description"),
            is_rental: field("is_rental"),
            agent_id: field("agent_id"),
            image_data: field("image_data"),
        }
    }

    pub fn validate(&self) -> Result<ListingSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        if !validate::min_len(&self.address, 2) {
            errors.push("address", "Address must be at least 2 characters");
        }

        let region_id = self.region_id.trim().parse::<i64>().ok();
        if region_id.is_none() {
            errors.push("region_id", "Choose a region");
        }
        let city_id = self.city_id.trim().parse::<i64>().ok();
        if city_id.is_none() {
            errors.push("city_id", "Choose a city");
        }
        let agent_id = self.agent_id.trim().parse::<i64>().ok();
        if agent_id.is_none() {
            errors.push("agent_id", "Choose an agent");
        }

        if !validate::is_numeric(&self.zip_code) {
            errors.push("zip_code", "Zip code must contain only digits");
        }
        if !validate::is_numeric(&self.price) {
            errors.push("price", "Price must be a whole number");
        }
        if !validate::is_numeric(&self.area) {
            errors.push("area", "Area must be a whole number");
        }
        if !validate::is_numeric(&self.bedrooms) {
            errors.push("bedrooms", "Bedrooms must be a whole number");
        }

        if !validate::min_words(&self.description, 5) {
            errors.push("description", "Description must be at least 5 words");
        }

        let is_rental = match self.is_rental.trim() {
            "0" => Some(0),
            "1" => Some(1),
            _ => None,
        };
        if is_rental.is_none() {
            errors.push("is_rental", "Choose sale or rental");
        }

        let image = match ImageUpload::from_data_url(&self.image_data) {
            Ok(image) => Some(image),
            Err(message) => {
                errors.push("image", message);
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ListingSubmission {
            address: self.address.trim().to_string(),
            region_id: region_id.unwrap(),
            city_id: city_id.unwrap(),
            zip_code: self.zip_code.trim().to_string(),
            price: self.price.trim().parse().unwrap(),
            area: self.area.trim().parse().unwrap(),
            bedrooms: self.bedrooms.trim().parse().unwrap(),
            description: self.description.trim().to_string(),
            is_rental: is_rental.unwrap(),
            agent_id: agent_id.unwrap(),
            image: image.unwrap(),
        })
    }
}
