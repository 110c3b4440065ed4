//! VideoVault demo: wires the share-link crates together over the in-memory
//! catalog and logs the shared-links dashboard.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use videovault_core::config::AppConfig;
use videovault_core::error::AppError;
use videovault_core::events::EventBus;
use videovault_core::traits::clock::{Clock, SystemClock};
use videovault_core::traits::id_generator::TokenIdGenerator;
use videovault_core::types::pagination::PageRequest;
use videovault_database::repositories::{MemoryShareLinkRepository, MemoryVideoRepository};
use videovault_database::seed::seed_demo_catalog;
use videovault_service::{AccessService, LinkRegistry, SharedLinksOverview};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("VideoVault error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("VIDEOVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VideoVault v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let events = EventBus::new(config.sharing.event_capacity);
    let links = Arc::new(MemoryShareLinkRepository::new());
    let videos = Arc::new(MemoryVideoRepository::new());

    if config.demo.seed {
        seed_demo_catalog(videos.as_ref(), links.as_ref(), clock.now()).await?;
    }

    let registry = Arc::new(LinkRegistry::new(
        links,
        clock,
        Arc::new(TokenIdGenerator),
        events.clone(),
    ));
    let overview = SharedLinksOverview::new(
        registry.clone(),
        videos.clone(),
        config.sharing.base_url(),
    );
    let access = AccessService::new(registry, videos, events);

    let page = overview.list(&PageRequest::default()).await?;
    tracing::info!(total = page.total_items, "Shared links");
    for row in &page.items {
        tracing::info!(
            url = %row.url,
            video = row.video_title.as_deref().unwrap_or("(removed)"),
            visibility = %row.link.visibility,
            status = %row.status,
            expires = %row.expiry_label,
            views = row.link.view_count,
            last_viewed = %row.last_viewed_label,
            "Link"
        );
    }

    for row in &page.items {
        let outcome = access.access(&row.link.id, None).await?;
        match outcome.deny_reason() {
            None => tracing::info!(link_id = %row.link.id, "Anonymous viewer granted"),
            Some(reason) => tracing::info!(
                link_id = %row.link.id,
                reason = %reason,
                "{}",
                reason.message()
            ),
        }
    }

    Ok(())
}
