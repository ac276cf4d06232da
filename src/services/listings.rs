// src/services/listings.rs
use crate::domain::Listing;
use crate::forms::listing_form::ListingSubmission;
use crate::services::{ApiClient, ApiError};
use reqwest::blocking::multipart::{Form, Part};

/// Wrapper over the `/real-estates` resource family.
#[derive(Clone)]
pub struct ListingsApi {
    api: ApiClient,
}

impl ListingsApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn get_all(&self) -> Result<Vec<Listing>, ApiError> {
        self.api.get_json("/real-estates", true)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Listing, ApiError> {
        self.api.get_json(&format!("/real-estates/{id}"), true)
    }

    /// The API takes listings as multipart form-data, image included.
    pub fn create(&self, submission: &ListingSubmission) -> Result<Listing, ApiError> {
        let image = Part::bytes(submission.image.bytes.clone())
            .file_name(submission.image.file_name.clone())
            .mime_str(&submission.image.content_type)
            .map_err(|e| ApiError::Network(format!("bad image content type: {e}")))?;

        let form = Form::new()
            .text("address", submission.address.clone())
            .text("region_id", submission.region_id.to_string())
            .text("city_id", submission.city_id.to_string())
            .text("zip_code", submission.zip_code.clone())
            .text("price", submission.price.to_string())
            .text("area", submission.area.to_string())
            .text("bedrooms", submission.bedrooms.to_string())
            .text("description", submission.description.clone())
            .text("is_rental", submission.is_rental.to_string())
            .text("agent_id", submission.agent_id.to_string())
            .part("image", image);

        self.api.post_multipart("/real-estates", form)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/real-estates/{id}"))
    }
}
