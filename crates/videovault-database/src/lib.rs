//! # videovault-database
//!
//! Repository traits and their in-memory implementations for share links
//! and videos, plus a demo data set. A store is constructed explicitly and
//! handed to services as an `Arc<dyn ...>`; nothing here is a global.

pub mod repositories;
pub mod seed;

pub use repositories::{
    MemoryShareLinkRepository, MemoryVideoRepository, ShareLinkRepository, VideoRepository,
};
