//! Video domain entities.

pub mod model;
pub mod status;

pub use model::Video;
pub use status::VideoStatus;
