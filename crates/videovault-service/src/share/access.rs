//! Share access flow: what happens when a viewer opens `/share/{id}`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use videovault_core::events::{DomainEvent, EventBus, ShareEvent};
use videovault_core::result::AppResult;
use videovault_core::traits::repository::Repository;
use videovault_core::types::id::LinkId;
use videovault_database::repositories::{VideoRepository, ViewAttempt};
use videovault_entity::share::ShareLink;
use videovault_entity::video::Video;

use super::email::parse_viewer_email;
use super::evaluator::{AccessDecision, AccessEvaluator, DenyReason};
use super::registry::LinkRegistry;

/// What the viewer gets back after opening a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessOutcome {
    /// Playback allowed; the view has been recorded.
    Granted {
        /// The link after the view was counted.
        link: ShareLink,
        /// The shared video.
        video: Video,
    },
    /// Playback refused.
    Denied {
        /// Why.
        reason: DenyReason,
        /// When the link expired, for [`DenyReason::Expired`].
        expired_at: Option<DateTime<Utc>>,
    },
}

impl AccessOutcome {
    /// Whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// The deny reason, if denied.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Granted { .. } => None,
            Self::Denied { reason, .. } => Some(*reason),
        }
    }
}

/// Handles viewers opening share links.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Link registry, for reads and view accounting.
    registry: Arc<LinkRegistry>,
    /// Video lookup for the shared video.
    videos: Arc<dyn VideoRepository>,
    /// Publisher for denial events.
    events: EventBus,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(
        registry: Arc<LinkRegistry>,
        videos: Arc<dyn VideoRepository>,
        events: EventBus,
    ) -> Self {
        Self {
            registry,
            videos,
            events,
        }
    }

    /// Opens a link as `viewer_email` (or anonymously).
    ///
    /// A supplied email is normalized first and must be a valid address;
    /// a malformed one is a validation error rather than a denial. A link
    /// whose video no longer exists is treated as not found. The decision
    /// is re-checked against the stored link at the moment the view is
    /// counted, so a link deleted or edited meanwhile is denied and not
    /// counted.
    pub async fn access(
        &self,
        link_id: &LinkId,
        viewer_email: Option<&str>,
    ) -> AppResult<AccessOutcome> {
        let viewer = viewer_email.map(parse_viewer_email).transpose()?;
        let now = self.registry.clock().now();

        let link = self.registry.get(link_id).await?;
        let video = match &link {
            Some(link) => self.videos.find_by_id(&link.video_id).await?,
            None => None,
        };
        let visible_link = link.as_ref().filter(|_| video.is_some());

        let decision = AccessEvaluator::decide(visible_link, viewer.as_deref(), now);
        debug!(
            link_id = %link_id,
            anonymous = viewer.is_none(),
            ?decision,
            "Evaluated share access"
        );

        let video = match (decision, video) {
            (AccessDecision::Granted, Some(video)) => video,
            (AccessDecision::Granted, None) => {
                return Ok(self.deny(link_id, DenyReason::LinkNotFound, None));
            }
            (AccessDecision::Denied(reason), _) => {
                let at = expired_at(link.as_ref(), reason);
                return Ok(self.deny(link_id, reason, at));
            }
        };

        let mut current = AccessDecision::Granted;
        let mut still_granted = |stored: &ShareLink| {
            current = AccessEvaluator::decide(Some(stored), viewer.as_deref(), now);
            current.is_granted()
        };
        let attempt = self
            .registry
            .record_view_if(link_id, now, &mut still_granted)
            .await?;

        match attempt {
            ViewAttempt::Recorded(link) => Ok(AccessOutcome::Granted { link, video }),
            ViewAttempt::Rejected(stored) => {
                let reason = current.deny_reason().unwrap_or(DenyReason::LinkNotFound);
                Ok(self.deny(link_id, reason, expired_at(Some(&stored), reason)))
            }
            ViewAttempt::Missing => Ok(self.deny(link_id, DenyReason::LinkNotFound, None)),
        }
    }

    fn deny(
        &self,
        link_id: &LinkId,
        reason: DenyReason,
        expired_at: Option<DateTime<Utc>>,
    ) -> AccessOutcome {
        // the access form is the normal first step for private links
        if reason != DenyReason::AccessFormRequired {
            warn!(link_id = %link_id, reason = %reason, "Share access denied");
            self.events.publish(DomainEvent::new(
                self.registry.clock().now(),
                ShareEvent::AccessDenied {
                    link_id: link_id.clone(),
                    reason: reason.to_string(),
                },
            ));
        }
        AccessOutcome::Denied { reason, expired_at }
    }
}

/// The expiry instant to report alongside a [`DenyReason::Expired`] denial.
fn expired_at(link: Option<&ShareLink>, reason: DenyReason) -> Option<DateTime<Utc>> {
    match reason {
        DenyReason::Expired => link.and_then(|l| l.expires_at),
        _ => None,
    }
}
