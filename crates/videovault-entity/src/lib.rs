//! # videovault-entity
//!
//! Domain entity models for VideoVault. Every struct in this crate is a
//! stored record or a domain value object, and derives `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod share;
pub mod video;
