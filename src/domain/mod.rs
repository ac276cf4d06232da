pub mod criteria;
pub mod filter;
pub mod listing;

pub use criteria::FilterCriteria;
pub use filter::{similar_listings, ListingFilter};
pub use listing::{Agent, City, Listing, Region};
