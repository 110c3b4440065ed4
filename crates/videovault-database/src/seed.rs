//! Demo catalog: five videos and five share links covering every link state.
//!
//! Timestamps are anchored to the `now` passed in, so the mix of expired,
//! expiring, and never-expiring links stays the same whenever it is loaded.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use videovault_core::result::AppResult;
use videovault_core::traits::repository::Repository;
use videovault_core::types::id::{LinkId, VideoId};
use videovault_entity::share::{ShareLink, Visibility};
use videovault_entity::video::{Video, VideoStatus};

use crate::repositories::{ShareLinkRepository, VideoRepository};

/// Number of share links in the demo catalog; generated ids should start after it.
pub const DEMO_LINK_COUNT: u64 = 5;

/// Counts of seeded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Videos inserted.
    pub videos: usize,
    /// Share links inserted.
    pub links: usize,
}

/// Insert the demo catalog into the given repositories.
pub async fn seed_demo_catalog(
    videos: &dyn VideoRepository,
    links: &dyn ShareLinkRepository,
    now: DateTime<Utc>,
) -> AppResult<SeedSummary> {
    let demo_videos = demo_videos(now);
    for video in &demo_videos {
        videos.create(video).await?;
    }

    let demo_links = demo_links(now);
    for link in &demo_links {
        links.create(link).await?;
    }

    let summary = SeedSummary {
        videos: demo_videos.len(),
        links: demo_links.len(),
    };
    info!(
        videos = summary.videos,
        links = summary.links,
        "Seeded demo catalog"
    );
    Ok(summary)
}

/// Sample videos in every processing state.
pub fn demo_videos(now: DateTime<Utc>) -> Vec<Video> {
    let video = |id: &str, title: &str, description: &str, status, days_ago: i64| Video {
        id: VideoId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        owner: "John Doe".to_string(),
        uploaded_at: now - Duration::days(days_ago),
    };

    vec![
        video(
            "video-1",
            "Product Demo Video",
            "A comprehensive demonstration of our product features and capabilities.",
            VideoStatus::Ready,
            40,
        ),
        video(
            "video-2",
            "Team Meeting Recording",
            "Recording of our weekly team meeting with important updates.",
            VideoStatus::Processing,
            2,
        ),
        video(
            "video-3",
            "Marketing Campaign",
            "Overview of our upcoming marketing strategy and campaign plans.",
            VideoStatus::Uploading,
            0,
        ),
        video(
            "video-4",
            "Tutorial: How to Use Our Platform",
            "Step-by-step guide on how to use all features of our platform.",
            VideoStatus::Ready,
            10,
        ),
        video(
            "video-5",
            "Customer Testimonial",
            "Our customer sharing their experience with our product.",
            VideoStatus::Ready,
            15,
        ),
    ]
}

/// Sample links: one expired public, two private, one never-expiring, one long-lived public.
pub fn demo_links(now: DateTime<Utc>) -> Vec<ShareLink> {
    let emails = |list: &[&str]| -> BTreeSet<String> {
        list.iter().map(|e| e.to_string()).collect()
    };

    vec![
        ShareLink {
            id: LinkId::new("link-1"),
            video_id: VideoId::new("video-1"),
            visibility: Visibility::Public,
            allowed_emails: BTreeSet::new(),
            expires_at: Some(now - Duration::days(5)),
            created_at: now - Duration::days(35),
            last_viewed_at: Some(now - Duration::days(6)),
            view_count: 24,
        },
        ShareLink {
            id: LinkId::new("link-2"),
            video_id: VideoId::new("video-1"),
            visibility: Visibility::Private,
            allowed_emails: emails(&["guest@example.com", "team@example.com"]),
            expires_at: Some(now + Duration::days(20)),
            created_at: now - Duration::days(10),
            last_viewed_at: Some(now - Duration::days(8)),
            view_count: 3,
        },
        ShareLink {
            id: LinkId::new("link-3"),
            video_id: VideoId::new("video-2"),
            visibility: Visibility::Public,
            allowed_emails: BTreeSet::new(),
            expires_at: None,
            created_at: now - Duration::days(2),
            last_viewed_at: Some(now - Duration::days(1)),
            view_count: 12,
        },
        ShareLink {
            id: LinkId::new("link-4"),
            video_id: VideoId::new("video-4"),
            visibility: Visibility::Private,
            allowed_emails: emails(&["training@example.com"]),
            expires_at: Some(now + Duration::hours(10)),
            created_at: now - Duration::days(9),
            last_viewed_at: None,
            view_count: 0,
        },
        ShareLink {
            id: LinkId::new("link-5"),
            video_id: VideoId::new("video-5"),
            visibility: Visibility::Public,
            allowed_emails: BTreeSet::new(),
            expires_at: Some(now + Duration::days(60)),
            created_at: now - Duration::days(15),
            last_viewed_at: Some(now - Duration::days(3)),
            view_count: 8,
        },
    ]
}
