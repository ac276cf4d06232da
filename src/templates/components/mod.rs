mod field;
mod filter_panel;
mod image_picker;
mod listing_card;

pub use field::field_error;
pub use filter_panel::filter_panel;
pub use image_picker::image_picker;
pub use listing_card::listing_card;
