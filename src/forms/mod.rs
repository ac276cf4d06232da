pub mod agent_form;
pub mod image;
pub mod listing_form;
pub mod register_form;
pub mod validate;

pub use validate::FieldErrors;
