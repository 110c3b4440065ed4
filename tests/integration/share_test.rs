//! Integration tests for share-link lifecycle.

mod helpers;

use chrono::Duration;

use videovault_core::events::ShareEvent;
use videovault_core::types::id::{LinkId, VideoId};
use videovault_core::types::pagination::PageRequest;
use videovault_entity::share::{ExpiryPolicy, LinkStatus, Visibility};
use videovault_service::UpdateLinkRequest;

use helpers::{TestApp, t0};

#[tokio::test]
async fn test_create_private_link_without_emails_fails() {
    let app = TestApp::new().await;

    let err = app
        .registry
        .create(TestApp::request(Visibility::Private, &[], ExpiryPolicy::Never))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        app.registry
            .list_by_video(&VideoId::new("video-1"))
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_new_link_appears_first_for_its_video() {
    let app = TestApp::new().await;
    app.clock.advance(Duration::minutes(5));

    let link = app
        .registry
        .create(TestApp::request(
            Visibility::Public,
            &[],
            ExpiryPolicy::ThirtyDays,
        ))
        .await
        .unwrap();
    assert_eq!(link.id.as_str(), "link-6");

    let rows = app.overview.for_video(&VideoId::new("video-1")).await.unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.link.id.as_str()).collect();
    assert_eq!(ids, vec!["link-6", "link-2", "link-1"]);
    assert_eq!(rows[0].expiry_label, "Expires in 30 days");
    assert_eq!(rows[0].url, "https://videovault.example/share/link-6");
}

#[tokio::test]
async fn test_edit_round_trip() {
    let app = TestApp::new().await;
    let id = LinkId::new("link-2");
    let before = app.registry.get(&id).await.unwrap().unwrap();

    let form = UpdateLinkRequest::prefill(&before, app.clock.advance(Duration::hours(1)));
    assert_eq!(form.expiry, ExpiryPolicy::ThirtyDays);
    assert_eq!(
        form.allowed_emails,
        vec!["guest@example.com".to_string(), "team@example.com".to_string()]
    );

    let updated = app
        .registry
        .update(
            &id,
            UpdateLinkRequest {
                visibility: Visibility::Public,
                allowed_emails: form.allowed_emails,
                expiry: ExpiryPolicy::Never,
            },
        )
        .await
        .unwrap();

    let after = app.registry.get(&id).await.unwrap().unwrap();
    assert_eq!(after, updated);
    assert_eq!(after.visibility, Visibility::Public);
    assert!(after.allowed_emails.is_empty());
    assert_eq!(after.expires_at, None);
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.view_count, before.view_count);
    assert_eq!(after.last_viewed_at, before.last_viewed_at);
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let app = TestApp::new().await;
    let id = LinkId::new("link-3");

    app.registry.delete(&id).await.unwrap();
    let err = app.registry.delete(&id).await.unwrap_err();
    assert!(err.is_not_found());

    let page = app.overview.list(&PageRequest::default()).await.unwrap();
    assert_eq!(page.total_items, 4);
}

#[tokio::test]
async fn test_expired_links_remain_listed() {
    let app = TestApp::new().await;
    app.clock.advance(Duration::days(31));

    let page = app.overview.list(&PageRequest::default()).await.unwrap();
    assert_eq!(page.total_items, 5);

    let expired: Vec<&str> = page
        .items
        .iter()
        .filter(|r| r.status == LinkStatus::Expired)
        .map(|r| r.link.id.as_str())
        .collect();
    // link-2 (20d) and link-4 (10h) have run out too; link-3 never expires
    assert_eq!(expired.len(), 3);
    assert!(expired.contains(&"link-1"));
    assert!(expired.contains(&"link-2"));
    assert!(expired.contains(&"link-4"));
}

#[tokio::test]
async fn test_lifecycle_events() {
    let app = TestApp::new().await;
    let mut rx = app.events.subscribe();

    let link = app
        .registry
        .create(TestApp::request(
            Visibility::Private,
            &["viewer@example.com"],
            ExpiryPolicy::OneDay,
        ))
        .await
        .unwrap();
    app.registry.delete(&link.id).await.unwrap();

    let created = rx.recv().await.unwrap();
    assert_eq!(created.timestamp, t0());
    assert_eq!(
        created.payload,
        ShareEvent::Created {
            link_id: link.id.clone(),
            video_id: VideoId::new("video-1"),
            visibility: "PRIVATE".to_string(),
        }
    );
    let deleted = rx.recv().await.unwrap();
    assert_eq!(
        deleted.payload,
        ShareEvent::Deleted {
            link_id: link.id,
            video_id: VideoId::new("video-1"),
        }
    );
}
