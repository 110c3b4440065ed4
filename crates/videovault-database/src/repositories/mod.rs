//! Repository traits and in-memory implementations.

pub mod share;
pub mod video;

pub use share::{MemoryShareLinkRepository, ShareLinkRepository, ViewAttempt};
pub use video::{MemoryVideoRepository, VideoRepository};
