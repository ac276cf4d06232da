pub mod identity;
pub mod sessions;
pub mod token;

pub use identity::{AuthenticatedUser, IdentityClient, IdentityError};
pub use sessions::{Session, SessionStore};
