//! Share-link management: lifecycle, access control, and presentation helpers.

pub mod access;
pub mod display;
pub mod email;
pub mod evaluator;
pub mod overview;
pub mod registry;

pub use access::{AccessOutcome, AccessService};
pub use evaluator::{AccessDecision, AccessEvaluator, DenyReason};
pub use overview::{SharedLinkView, SharedLinksOverview};
pub use registry::{CreateLinkRequest, LinkRegistry, UpdateLinkRequest};
