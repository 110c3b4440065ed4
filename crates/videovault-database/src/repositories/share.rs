//! Share-link repository.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use videovault_core::error::AppError;
use videovault_core::result::AppResult;
use videovault_core::traits::repository::Repository;
use videovault_core::types::id::{LinkId, VideoId};
use videovault_core::types::pagination::{PageRequest, PageResponse};
use videovault_entity::share::{ShareLink, ShareLinkChanges};

/// Storage for share links.
///
/// Mutations that touch a single link (`apply_changes`, `record_view`) must
/// be atomic per link id so concurrent viewers never lose an increment.
#[async_trait]
pub trait ShareLinkRepository: Repository<ShareLink, LinkId> + std::fmt::Debug {
    /// All links pointing at a video, newest first.
    async fn find_by_video(&self, video_id: &VideoId) -> AppResult<Vec<ShareLink>>;

    /// Replace the mutable fields of a link. Returns `None` if the id is unknown.
    async fn apply_changes(
        &self,
        id: &LinkId,
        changes: ShareLinkChanges,
    ) -> AppResult<Option<ShareLink>>;

    /// Increment the view count and stamp the last view. Returns `None` if the id is unknown.
    async fn record_view(&self, id: &LinkId, at: DateTime<Utc>) -> AppResult<Option<ShareLink>>;

    /// Count a view only if `check` accepts the link as currently stored.
    ///
    /// The check and the increment run under the same per-link lock, so an
    /// edit or delete cannot slip in between them.
    async fn record_view_if(
        &self,
        id: &LinkId,
        at: DateTime<Utc>,
        check: &mut (dyn for<'a> FnMut(&'a ShareLink) -> bool + Send),
    ) -> AppResult<ViewAttempt>;
}

/// Result of [`ShareLinkRepository::record_view_if`].
#[derive(Debug, Clone)]
pub enum ViewAttempt {
    /// The check passed and the view was counted.
    Recorded(ShareLink),
    /// The check refused the current link. Nothing was changed.
    Rejected(ShareLink),
    /// No link with that id.
    Missing,
}

/// Share-link store backed by a sharded concurrent map.
#[derive(Debug, Default)]
pub struct MemoryShareLinkRepository {
    links: DashMap<LinkId, ShareLink>,
}

impl MemoryShareLinkRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut links: Vec<ShareLink>) -> Vec<ShareLink> {
        links.sort_by(|a, b| {
            Reverse(a.created_at)
                .cmp(&Reverse(b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        links
    }
}

#[async_trait]
impl Repository<ShareLink, LinkId> for MemoryShareLinkRepository {
    async fn find_by_id(&self, id: &LinkId) -> AppResult<Option<ShareLink>> {
        Ok(self.links.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<ShareLink>> {
        let all: Vec<ShareLink> = self.links.iter().map(|e| e.value().clone()).collect();
        Ok(PageResponse::from_ordered(Self::newest_first(all), page))
    }

    async fn create(&self, link: &ShareLink) -> AppResult<ShareLink> {
        match self.links.entry(link.id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Share link '{}' already exists",
                link.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                debug!(link_id = %link.id, "Stored share link");
                Ok(link.clone())
            }
        }
    }

    async fn update(&self, link: &ShareLink) -> AppResult<ShareLink> {
        match self.links.get_mut(&link.id) {
            Some(mut stored) => {
                *stored = link.clone();
                Ok(link.clone())
            }
            None => Err(AppError::not_found(format!(
                "Share link '{}' not found",
                link.id
            ))),
        }
    }

    async fn delete(&self, id: &LinkId) -> AppResult<bool> {
        Ok(self.links.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.links.len() as u64)
    }
}

#[async_trait]
impl ShareLinkRepository for MemoryShareLinkRepository {
    async fn find_by_video(&self, video_id: &VideoId) -> AppResult<Vec<ShareLink>> {
        let links: Vec<ShareLink> = self
            .links
            .iter()
            .filter(|e| &e.value().video_id == video_id)
            .map(|e| e.value().clone())
            .collect();
        Ok(Self::newest_first(links))
    }

    async fn apply_changes(
        &self,
        id: &LinkId,
        changes: ShareLinkChanges,
    ) -> AppResult<Option<ShareLink>> {
        Ok(self.links.get_mut(id).map(|mut link| {
            link.apply(changes);
            link.clone()
        }))
    }

    async fn record_view(&self, id: &LinkId, at: DateTime<Utc>) -> AppResult<Option<ShareLink>> {
        Ok(self.links.get_mut(id).map(|mut link| {
            link.record_view(at);
            link.clone()
        }))
    }

    async fn record_view_if(
        &self,
        id: &LinkId,
        at: DateTime<Utc>,
        check: &mut (dyn for<'a> FnMut(&'a ShareLink) -> bool + Send),
    ) -> AppResult<ViewAttempt> {
        let Some(mut link) = self.links.get_mut(id) else {
            return Ok(ViewAttempt::Missing);
        };
        if !check(link.value()) {
            return Ok(ViewAttempt::Rejected(link.clone()));
        }
        link.record_view(at);
        Ok(ViewAttempt::Recorded(link.clone()))
    }
}
