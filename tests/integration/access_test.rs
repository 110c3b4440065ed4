//! Integration tests for viewers opening share links.

mod helpers;

use chrono::Duration;

use videovault_core::types::id::LinkId;
use videovault_entity::share::{ExpiryPolicy, Visibility};
use videovault_service::{AccessEvaluator, AccessOutcome, DenyReason};

use helpers::{TestApp, t0};

#[tokio::test]
async fn test_private_link_expires_after_one_hour() {
    let app = TestApp::new().await;
    let link = app
        .registry
        .create(TestApp::request(
            Visibility::Private,
            &["guest@example.com"],
            ExpiryPolicy::OneHour,
        ))
        .await
        .unwrap();

    app.clock.set(t0() + Duration::minutes(30));
    let outcome = app
        .access
        .access(&link.id, Some("guest@example.com"))
        .await
        .unwrap();
    assert!(outcome.is_granted());

    app.clock.set(t0() + Duration::minutes(90));
    let outcome = app
        .access
        .access(&link.id, Some("guest@example.com"))
        .await
        .unwrap();
    assert_eq!(outcome.deny_reason(), Some(DenyReason::Expired));

    let stored = app.registry.get(&link.id).await.unwrap().unwrap();
    assert_eq!(stored.view_count, 1);
    assert_eq!(stored.last_viewed_at, Some(t0() + Duration::minutes(30)));
}

#[tokio::test]
async fn test_seeded_links_anonymous_access() {
    let app = TestApp::new().await;

    let cases = [
        ("link-1", Some(DenyReason::Expired)),
        ("link-2", Some(DenyReason::AccessFormRequired)),
        ("link-3", None),
        ("link-4", Some(DenyReason::AccessFormRequired)),
        ("link-5", None),
        ("link-99", Some(DenyReason::LinkNotFound)),
    ];
    for (id, expected) in cases {
        let outcome = app.access.access(&LinkId::new(id), None).await.unwrap();
        assert_eq!(outcome.deny_reason(), expected, "{id}");
    }
}

#[tokio::test]
async fn test_allow_list_is_case_insensitive_after_normalization() {
    let app = TestApp::new().await;
    let link = app
        .registry
        .create(TestApp::request(
            Visibility::Private,
            &[" Guest@Example.com "],
            ExpiryPolicy::OneDay,
        ))
        .await
        .unwrap();

    let outcome = app
        .access
        .access(&link.id, Some("GUEST@example.COM"))
        .await
        .unwrap();
    match outcome {
        AccessOutcome::Granted { link, video } => {
            assert_eq!(link.view_count, 1);
            assert_eq!(video.title, "Product Demo Video");
        }
        other => panic!("expected grant, got {other:?}"),
    }
}

#[tokio::test]
async fn test_public_link_ignores_viewer_email() {
    let app = TestApp::new().await;
    let id = LinkId::new("link-3");

    for viewer in [None, Some("anyone@example.com")] {
        assert!(app.access.access(&id, viewer).await.unwrap().is_granted());
    }

    let stored = app.registry.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.view_count, 14);
}

#[tokio::test]
async fn test_evaluator_matches_service_on_snapshot() {
    let app = TestApp::new().await;
    let link = app
        .registry
        .get(&LinkId::new("link-2"))
        .await
        .unwrap()
        .unwrap();

    let decision = AccessEvaluator::decide(Some(&link), Some("team@example.com"), t0());
    assert!(decision.is_granted());

    let outcome = app
        .access
        .access(&link.id, Some("team@example.com"))
        .await
        .unwrap();
    assert!(outcome.is_granted());
}
