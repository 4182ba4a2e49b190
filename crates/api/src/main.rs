use std::net::SocketAddr;
use std::sync::Arc;

use prosperity_api::auth::resolver_from_config;
use prosperity_api::config::{ServerConfig, StoreBackend};
use prosperity_api::router::build_app_router;
use prosperity_api::state::AppState;
use prosperity_db::store::{GameStore, MemoryGameStore, PgGameStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prosperity_api=debug,prosperity_db=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store = build_store(&config.store).await;
    let identity = resolver_from_config(&config.identity);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be a valid IP address"),
        config.port,
    );

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        identity,
    };
    let app = build_app_router(state, &config);

    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect the configured store, applying migrations for PostgreSQL.
async fn build_store(backend: &StoreBackend) -> Arc<dyn GameStore> {
    match backend {
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = prosperity_db::create_pool(database_url, *max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            prosperity_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            prosperity_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgGameStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Arc::new(MemoryGameStore::new())
        }
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
