//! # videovault-service
//!
//! Business logic for VideoVault share links. The [`LinkRegistry`] owns
//! link lifecycle, the [`AccessEvaluator`] is the pure grant/deny rule, and
//! the [`AccessService`] ties them together for a viewer opening a link.
//!
//! Services follow constructor injection: repositories, the clock, and the
//! id generator are provided at construction time via `Arc` references.

pub mod share;

pub use share::{
    AccessDecision, AccessEvaluator, AccessOutcome, AccessService, CreateLinkRequest, DenyReason,
    LinkRegistry, SharedLinkView, SharedLinksOverview, UpdateLinkRequest,
};
