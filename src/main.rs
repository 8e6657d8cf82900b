// region:    --- Imports
use auction_api::auth::TokenService;
use auction_api::config::Config;
use auction_api::database::DatabaseManager;
use auction_api::routes;
use auction_api::state::AppState;
use auction_api::store::PostgresStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let db_manager = Arc::new(DatabaseManager::new(&config).await?);
    if let Err(e) = db_manager.initialize_database(config.reset_database).await {
        error!("{:<12} --> Database initialization failed: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> Database initialized", "Main");

    let store = Arc::new(PostgresStore::new(db_manager.get_pool()));
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_secs);
    let state = AppState::new(store, tokens, config.bcrypt_cost);

    let routes_all = routes::api_routes(state).layer(routes::cors_layer(&config.cors_origin)?);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    if let Err(err) = axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("{:<12} --> Server error: {}", "Main", err);
    }

    db_manager.close().await;
    info!("{:<12} --> Shutdown complete", "Main");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("{:<12} --> Ctrl-C handler failed: {}", "Main", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("{:<12} --> SIGTERM handler failed: {}", "Main", e);
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
    info!("{:<12} --> Shutdown signal received", "Main");
}
// endregion: --- Main
