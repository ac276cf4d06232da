pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{field_error, filter_panel, listing_card};
pub use layouts::desktop::desktop_layout;
