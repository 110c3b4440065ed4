//! Share-link lifecycle: create, edit, delete, list, and view accounting.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use videovault_core::error::AppError;
use videovault_core::events::{DomainEvent, EventBus, ShareEvent};
use videovault_core::result::AppResult;
use videovault_core::traits::clock::Clock;
use videovault_core::traits::id_generator::IdGenerator;
use videovault_core::traits::repository::Repository;
use videovault_core::types::id::{LinkId, VideoId};
use videovault_core::types::pagination::{PageRequest, PageResponse};
use videovault_database::repositories::{ShareLinkRepository, ViewAttempt};
use videovault_entity::share::{
    CreateShareLink, ExpiryPolicy, ShareLink, ShareLinkChanges, Visibility,
};

use super::email::normalize_allow_list;

/// Request to create a new share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    /// The video to share.
    pub video_id: VideoId,
    /// Public or email-restricted.
    pub visibility: Visibility,
    /// Raw allow-list entries. Ignored for public links.
    #[serde(default)]
    pub allowed_emails: Vec<String>,
    /// Lifetime, counted from the moment of creation.
    #[serde(default)]
    pub expiry: ExpiryPolicy,
}

/// Full replacement of a link's visibility, allow-list, and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLinkRequest {
    /// New visibility.
    pub visibility: Visibility,
    /// New raw allow-list entries. Ignored for public links.
    #[serde(default)]
    pub allowed_emails: Vec<String>,
    /// New lifetime, counted from the moment of the update.
    pub expiry: ExpiryPolicy,
}

impl UpdateLinkRequest {
    /// Pre-fill an edit form from the link's current state.
    pub fn prefill(link: &ShareLink, now: DateTime<Utc>) -> Self {
        Self {
            visibility: link.visibility,
            allowed_emails: link.allowed_emails.iter().cloned().collect(),
            expiry: ExpiryPolicy::infer(link.expires_at, now),
        }
    }
}

/// Single source of truth for share links.
#[derive(Debug, Clone)]
pub struct LinkRegistry {
    /// Share-link storage.
    links: Arc<dyn ShareLinkRepository>,
    /// Time source for creation, expiry, and view stamps.
    clock: Arc<dyn Clock>,
    /// Identifier source for new links.
    ids: Arc<dyn IdGenerator>,
    /// Publisher for share events.
    events: EventBus,
}

impl LinkRegistry {
    /// Creates a new link registry.
    pub fn new(
        links: Arc<dyn ShareLinkRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        events: EventBus,
    ) -> Self {
        Self {
            links,
            clock,
            ids,
            events,
        }
    }

    /// The clock this registry stamps links with.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Creates a new share link with zero views.
    pub async fn create(&self, req: CreateLinkRequest) -> AppResult<ShareLink> {
        let now = self.clock.now();
        let allowed_emails = resolve_allow_list(req.visibility, &req.allowed_emails)?;

        let data = CreateShareLink {
            video_id: req.video_id,
            visibility: req.visibility,
            allowed_emails,
            expires_at: req.expiry.resolve(now),
        };
        let link = ShareLink::new(self.ids.next_link_id(), data, now);
        let link = self.links.create(&link).await?;

        info!(
            link_id = %link.id,
            video_id = %link.video_id,
            visibility = %link.visibility,
            expiry = %req.expiry,
            "Share link created"
        );
        self.publish(ShareEvent::Created {
            link_id: link.id.clone(),
            video_id: link.video_id.clone(),
            visibility: link.visibility.to_string(),
        });

        Ok(link)
    }

    /// Replaces visibility, allow-list, and expiry. View stats and creation time are kept.
    ///
    /// An unknown id fails with not-found before the request itself is validated.
    pub async fn update(&self, id: &LinkId, req: UpdateLinkRequest) -> AppResult<ShareLink> {
        if self.links.find_by_id(id).await?.is_none() {
            return Err(link_not_found(id));
        }

        let now = self.clock.now();
        let changes = ShareLinkChanges {
            visibility: req.visibility,
            allowed_emails: resolve_allow_list(req.visibility, &req.allowed_emails)?,
            expires_at: req.expiry.resolve(now),
        };

        let link = self
            .links
            .apply_changes(id, changes)
            .await?
            .ok_or_else(|| link_not_found(id))?;

        info!(
            link_id = %id,
            visibility = %link.visibility,
            expiry = %req.expiry,
            "Share link updated"
        );
        self.publish(ShareEvent::Updated {
            link_id: link.id.clone(),
            visibility: link.visibility.to_string(),
        });

        Ok(link)
    }

    /// Deletes a link. Deleting an unknown or already-deleted id fails with not-found.
    pub async fn delete(&self, id: &LinkId) -> AppResult<()> {
        let link = self.links.find_by_id(id).await?.ok_or_else(|| link_not_found(id))?;

        if !self.links.delete(id).await? {
            return Err(link_not_found(id));
        }

        info!(link_id = %id, video_id = %link.video_id, "Share link deleted");
        self.publish(ShareEvent::Deleted {
            link_id: link.id,
            video_id: link.video_id,
        });

        Ok(())
    }

    /// Looks up a link. Expired links are still returned.
    pub async fn get(&self, id: &LinkId) -> AppResult<Option<ShareLink>> {
        self.links.find_by_id(id).await
    }

    /// All links for a video, newest first.
    pub async fn list_by_video(&self, video_id: &VideoId) -> AppResult<Vec<ShareLink>> {
        self.links.find_by_video(video_id).await
    }

    /// All links across videos, newest first.
    pub async fn list_all(&self, page: &PageRequest) -> AppResult<PageResponse<ShareLink>> {
        self.links.find_all(page).await
    }

    /// Counts a successful view. Only call after access was granted.
    pub async fn record_view(&self, id: &LinkId, now: DateTime<Utc>) -> AppResult<ShareLink> {
        let link = self
            .links
            .record_view(id, now)
            .await?
            .ok_or_else(|| link_not_found(id))?;

        self.viewed(&link);
        Ok(link)
    }

    /// Counts a view only if `check` still accepts the link at the moment of counting.
    pub async fn record_view_if(
        &self,
        id: &LinkId,
        now: DateTime<Utc>,
        check: &mut (dyn for<'a> FnMut(&'a ShareLink) -> bool + Send),
    ) -> AppResult<ViewAttempt> {
        let attempt = self.links.record_view_if(id, now, check).await?;
        if let ViewAttempt::Recorded(link) = &attempt {
            self.viewed(link);
        }
        Ok(attempt)
    }

    fn viewed(&self, link: &ShareLink) {
        info!(
            link_id = %link.id,
            video_id = %link.video_id,
            view_count = link.view_count,
            "Share link viewed"
        );
        self.publish(ShareEvent::Viewed {
            link_id: link.id.clone(),
            view_count: link.view_count,
        });
    }

    fn publish(&self, event: ShareEvent) {
        self.events.publish(DomainEvent::new(self.clock.now(), event));
    }
}

/// Normalize the allow-list for the given visibility.
///
/// Public links never store emails. A private link must name at least one
/// valid address, otherwise nobody could ever open it.
fn resolve_allow_list(visibility: Visibility, raw: &[String]) -> AppResult<BTreeSet<String>> {
    match visibility {
        Visibility::Public => Ok(BTreeSet::new()),
        Visibility::Private => {
            let allowed = normalize_allow_list(raw)?;
            if allowed.is_empty() {
                return Err(AppError::validation(
                    "A private link needs at least one allowed email address",
                ));
            }
            Ok(allowed)
        }
    }
}

fn link_not_found(id: &LinkId) -> AppError {
    AppError::not_found(format!("Share link '{id}' not found"))
}
