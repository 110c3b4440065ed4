//! Dashboard rows for the shared-links table and the per-video links panel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use videovault_core::result::AppResult;
use videovault_core::types::id::VideoId;
use videovault_core::types::pagination::{PageRequest, PageResponse};
use videovault_database::repositories::VideoRepository;
use videovault_entity::share::{ExpiryPolicy, LinkStatus, ShareLink};

use super::display::{expiry_label, relative_date};
use super::registry::LinkRegistry;

/// One row of the shared-links table.
#[derive(Debug, Clone, Serialize)]
pub struct SharedLinkView {
    /// The link as stored.
    pub link: ShareLink,
    /// Full public URL.
    pub url: String,
    /// Title of the shared video, if it still exists.
    pub video_title: Option<String>,
    /// Status derived at render time.
    pub status: LinkStatus,
    /// Expiry column text.
    pub expiry_label: String,
    /// Last-viewed column text.
    pub last_viewed_label: String,
    /// Expiry option to preselect when editing.
    pub edit_expiry: ExpiryPolicy,
}

/// Builds dashboard rows from the registry and video catalog.
#[derive(Debug, Clone)]
pub struct SharedLinksOverview {
    /// Link registry.
    registry: Arc<LinkRegistry>,
    /// Video lookup for titles.
    videos: Arc<dyn VideoRepository>,
    /// Origin that share URLs are rooted at.
    base_url: String,
}

impl SharedLinksOverview {
    /// Creates a new overview.
    pub fn new(
        registry: Arc<LinkRegistry>,
        videos: Arc<dyn VideoRepository>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            videos,
            base_url: base_url.into(),
        }
    }

    /// A page of links across all videos, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<SharedLinkView>> {
        let links = self.registry.list_all(page).await?;
        let now = self.registry.clock().now();

        let mut titles = Vec::with_capacity(links.items.len());
        for link in &links.items {
            titles.push(self.videos.find_title(&link.video_id).await?);
        }

        let mut titles = titles.into_iter();
        Ok(links.map(|link| {
            let title = titles.next().flatten();
            self.view(link, title, now)
        }))
    }

    /// All links for one video, newest first.
    pub async fn for_video(&self, video_id: &VideoId) -> AppResult<Vec<SharedLinkView>> {
        let title = self.videos.find_title(video_id).await?;
        let now = self.registry.clock().now();

        Ok(self
            .registry
            .list_by_video(video_id)
            .await?
            .into_iter()
            .map(|link| self.view(link, title.clone(), now))
            .collect())
    }

    fn view(
        &self,
        link: ShareLink,
        video_title: Option<String>,
        now: DateTime<Utc>,
    ) -> SharedLinkView {
        SharedLinkView {
            url: link.share_url(&self.base_url),
            video_title,
            status: link.status(now),
            expiry_label: expiry_label(link.expires_at, now),
            last_viewed_label: link
                .last_viewed_at
                .map(|at| relative_date(at, now))
                .unwrap_or_else(|| "Never".to_string()),
            edit_expiry: ExpiryPolicy::infer(link.expires_at, now),
            link,
        }
    }
}
