// src/services/geo.rs
use crate::domain::{City, Region};
use crate::services::{ApiClient, ApiError};

/// Wrapper over `/regions` and `/cities`. These endpoints are public, so
/// no bearer token is attached.
#[derive(Clone)]
pub struct GeoApi {
    api: ApiClient,
}

impl GeoApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn regions(&self) -> Result<Vec<Region>, ApiError> {
        self.api.get_json("/regions", false)
    }

    pub fn cities(&self) -> Result<Vec<City>, ApiError> {
        self.api.get_json("/cities", false)
    }
}
