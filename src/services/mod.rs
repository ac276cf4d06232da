mod agents;
mod api;
mod api_error;
mod geo;
mod listings;

pub use agents::AgentsApi;
pub use api::ApiClient;
pub use api_error::ApiError;
pub use geo::GeoApi;
pub use listings::ListingsApi;
