//! Pinmap service entry point
//!
//! Reads configuration from TOML file (~/.config/pinmap/config.toml),
//! wires the in-memory store into the services and serves the REST API.

use std::sync::Arc;

use tracing::{error, info};

use pinmap::application::{
    CollectionService, LocationService, MapService, PinService, PinpointService, UserService,
};
use pinmap::domain::RepositoryProvider;
use pinmap::interfaces::http::middleware::AuthState;
use pinmap::session::SessionManager;
use pinmap::support::ShutdownSignal;
use pinmap::{create_api_router, default_config_path, ApiState, AppConfig, InMemoryProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PINMAP_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_logging(&cfg.logging.level);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_logging(&cfg.logging.level);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting Pinmap service...");

    // ── Storage & sessions ─────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryProvider::new());
    let sessions = SessionManager::shared();

    // ── Services ───────────────────────────────────────────────
    let state = ApiState {
        locations: Arc::new(LocationService::new(repos.clone())),
        pins: Arc::new(PinService::new(repos.clone())),
        maps: Arc::new(MapService::new(repos.clone())),
        collections: Arc::new(CollectionService::new(repos.clone())),
        pinpoints: Arc::new(PinpointService::new(repos.clone())),
        users: Arc::new(UserService::new(
            repos.clone(),
            sessions.clone(),
            config.security.bcrypt_cost,
        )),
        auth: AuthState {
            sessions,
            repos: repos.clone(),
        },
    };

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(state);
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("REST API listening on http://{}", address);
    info!("Swagger UI at http://{}/swagger-ui", address);

    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_ctrl_c();
    let wait = {
        let shutdown = shutdown.clone();
        async move { shutdown.wait().await }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(wait)
        .await?;

    info!("Pinmap service stopped");
    Ok(())
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}
