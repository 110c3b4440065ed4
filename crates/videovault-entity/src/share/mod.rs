//! Share-link domain entities.

pub mod expiry;
pub mod model;
pub mod visibility;

pub use expiry::ExpiryPolicy;
pub use model::{CreateShareLink, LinkStatus, ShareLink, ShareLinkChanges};
pub use visibility::Visibility;
