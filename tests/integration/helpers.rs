//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use videovault_core::events::EventBus;
use videovault_core::traits::clock::ManualClock;
use videovault_core::traits::id_generator::SequentialIdGenerator;
use videovault_core::types::id::VideoId;
use videovault_database::repositories::{MemoryShareLinkRepository, MemoryVideoRepository};
use videovault_database::seed::{DEMO_LINK_COUNT, seed_demo_catalog};
use videovault_entity::share::{ExpiryPolicy, Visibility};
use videovault_service::{AccessService, CreateLinkRequest, LinkRegistry, SharedLinksOverview};

/// Test application context
pub struct TestApp {
    /// Controllable clock shared by every service
    pub clock: Arc<ManualClock>,
    /// Event bus shared by every service
    pub events: EventBus,
    /// Link registry
    pub registry: Arc<LinkRegistry>,
    /// Access flow
    pub access: AccessService,
    /// Dashboard rows
    pub overview: SharedLinksOverview,
}

/// Fixed start instant for every test.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap()
}

impl TestApp {
    /// Create a new test application over the seeded demo catalog
    pub async fn new() -> Self {
        let clock = Arc::new(ManualClock::new(t0()));
        let events = EventBus::new(64);
        let links = Arc::new(MemoryShareLinkRepository::new());
        let videos = Arc::new(MemoryVideoRepository::new());

        seed_demo_catalog(videos.as_ref(), links.as_ref(), t0())
            .await
            .expect("Failed to seed demo catalog");

        let registry = Arc::new(LinkRegistry::new(
            links,
            clock.clone(),
            Arc::new(SequentialIdGenerator::starting_at(
                "link",
                DEMO_LINK_COUNT + 1,
            )),
            events.clone(),
        ));
        let access = AccessService::new(registry.clone(), videos.clone(), events.clone());
        let overview =
            SharedLinksOverview::new(registry.clone(), videos, "https://videovault.example");

        Self {
            clock,
            events,
            registry,
            access,
            overview,
        }
    }

    /// Build a create request for `video-1`
    pub fn request(
        visibility: Visibility,
        emails: &[&str],
        expiry: ExpiryPolicy,
    ) -> CreateLinkRequest {
        CreateLinkRequest {
            video_id: VideoId::new("video-1"),
            visibility,
            allowed_emails: emails.iter().map(|e| e.to_string()).collect(),
            expiry,
        }
    }
}
