// region:    --- Imports
use crate::handlers;
use crate::state::AppState;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

// endregion: --- Imports

// region:    --- Routes

/// Every endpoint, mounted under `/api`.
pub fn api_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/register", post(handlers::handle_register))
        .route("/login", post(handlers::handle_login))
        .route(
            "/auctions",
            get(handlers::handle_get_auctions).post(handlers::handle_create_auction),
        )
        .route("/bids", post(handlers::handle_bid))
        .route("/bid-history", get(handlers::handle_get_bid_history));

    Router::new().nest("/api", api).with_state(state)
}

/// CORS for a single browser origin, any method and header.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any))
}

// endregion: --- Routes
