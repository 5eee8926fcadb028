//! HTTP server initialization and runtime setup.
//!
//! Handles store construction, the expiry sweeper, and Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlStore;
use crate::infrastructure::storage::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// How often the in-memory store drops expired entries.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured store (Redis connection is verified with PING)
/// - Background expiry sweeper (in-memory store with a TTL only)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Redis is selected and cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let state = AppState::new(store, config.public_base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the store selected by the configuration.
///
/// # Errors
///
/// Returns an error if Redis is selected and every connection attempt fails.
/// The service must not accept traffic without a working store.
pub async fn build_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisStore::connect_with_retry(
                &config.redis_url,
                config.redis_ttl_seconds(),
                config.redis_connect_retries,
            )
            .await
            .context("Failed to connect to Redis")?;

            tracing::info!("Store enabled (Redis, TTL: {}s)", store.ttl_seconds());
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => match config.memory_ttl_seconds() {
            Some(ttl) => {
                let store = Arc::new(MemoryStore::with_ttl(chrono::Duration::seconds(
                    i64::try_from(ttl).context("URL_TTL_SECONDS is too large")?,
                )));
                tokio::spawn(run_expiry_sweeper(store.clone(), SWEEP_INTERVAL));
                tracing::info!("Store enabled (memory, TTL: {}s)", ttl);
                Ok(store)
            }
            None => {
                tracing::info!("Store enabled (memory, no expiry)");
                Ok(Arc::new(MemoryStore::new()))
            }
        },
    }
}

/// Periodically drops expired entries from the in-memory store.
pub async fn run_expiry_sweeper(store: Arc<MemoryStore>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let removed = store.purge_expired();
        if removed > 0 {
            tracing::debug!("Expiry sweep removed {} entries", removed);
        }
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
