// region:    --- Imports
use crate::auction::commands::{self as auction_commands, CreateAuctionCommand};
use crate::auction::model::Auction;
use crate::auth::model::Credentials;
use crate::auth::AuthenticatedUser;
use crate::bidding::commands::{handle_place_bid, PlaceBidCommand};
use crate::error::AppError;
use crate::query;
use crate::query::model::BidHistoryEntry;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

// endregion: --- Imports

/// Unwraps a JSON body, turning a malformed one into a 400.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

// region:    --- Auth Handlers

/// Register an account
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    info!("{:<12} --> POST /register", "Handler");
    state.auth.register(body(payload)?).await?;
    Ok(Json(json!({
        "success": true,
        "message": "User registered successfully!"
    })))
}

/// Log in and receive a session token
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    info!("{:<12} --> POST /login", "Handler");
    let token = state.auth.login(body(payload)?).await?;
    Ok(Json(json!({ "success": true, "token": token })))
}

// endregion: --- Auth Handlers

// region:    --- Command Handlers

/// Create an auction listing
pub async fn handle_create_auction(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateAuctionCommand>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    info!("{:<12} --> POST /auctions by {}", "Handler", user.user_id);
    auction_commands::handle_create_auction(body(payload)?, &*state.store).await?;
    Ok(Json(json!({ "message": "Auction created successfully" })))
}

/// Place a bid
pub async fn handle_bid(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<PlaceBidCommand>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    info!("{:<12} --> POST /bids by {}", "Handler", user.user_id);
    handle_place_bid(body(payload)?, user.user_id, &*state.store).await?;
    Ok(Json(json!({ "message": "Bid placed successfully" })))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// List every auction
pub async fn handle_get_auctions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Auction>>, AppError> {
    info!("{:<12} --> GET /auctions", "HandlerQuery");
    let auctions = auction_commands::list_auctions(&*state.store).await?;
    Ok(Json(auctions))
}

/// Per-auction won/lost report
pub async fn handle_get_bid_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<BidHistoryEntry>>, AppError> {
    info!("{:<12} --> GET /bid-history", "HandlerQuery");
    let history = query::handlers::get_bid_history(&*state.store).await?;
    Ok(Json(history))
}

// endregion: --- Query Handlers
