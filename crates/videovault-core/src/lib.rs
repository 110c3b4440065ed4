//! # videovault-core
//!
//! Core crate for VideoVault. Contains the unified error system,
//! configuration schemas, typed identifiers, the clock and id-generator
//! seams, the generic repository trait, and share-link domain events.
//!
//! This crate has **no** internal dependencies on other VideoVault crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
