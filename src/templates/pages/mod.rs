mod add_agent;
mod add_listing;
mod home;
mod listing_details;
mod login;
mod register;

pub use add_agent::add_agent_page;
pub use add_listing::add_listing_page;
pub use home::home_page;
pub use listing_details::listing_details_page;
pub use login::login_page;
pub use register::register_page;
