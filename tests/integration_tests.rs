//! End-to-end tests against a real PostgreSQL database over HTTP.
//!
//! Run with `DATABASE_URL` pointing at a disposable database:
//! `cargo test --test integration_tests -- --ignored`
use auction_api::auction::model::NewAuction;
use auction_api::auth::TokenService;
use auction_api::bidding::model::NewBid;
use auction_api::config::Config;
use auction_api::database::DatabaseManager;
use auction_api::error::AppError;
use auction_api::routes;
use auction_api::state::AppState;
use auction_api::store::{AuctionStore, BidStore, PostgresStore, UserStore};
use chrono::{Duration, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use uuid::Uuid;

/// Tracing for test output; later calls are no-ops.
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

const SECRET: &str = "integration-secret";

/// Config from the environment with a fixed secret and a cheap bcrypt cost.
fn config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        other => std::env::var(other).ok(),
    })
    .expect("DATABASE_URL must be set")
}

/// Opens the pool and makes sure the schema exists.
async fn connect() -> PostgresStore {
    init_tracing();
    let db_manager = DatabaseManager::new(&config()).await.unwrap();
    db_manager.initialize_database(false).await.unwrap();
    PostgresStore::new(db_manager.get_pool())
}

/// Starts the server on an ephemeral port and returns its base URL.
async fn setup() -> String {
    let config = config();
    let store = Arc::new(connect().await);
    let state = AppState::new(
        store,
        TokenService::new(&config.jwt_secret, config.token_ttl_secs),
        config.bcrypt_cost,
    );
    let app = routes::api_routes(state);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

async fn login(client: &Client, base: &str) -> String {
    let creds = json!({ "email": format!("{}@example.com", unique("user")), "password": "pw" });
    let response = client
        .post(format!("{}/register", base))
        .json(&creds)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = client
        .post(format!("{}/login", base))
        .json(&creds)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn create_auction(client: &Client, base: &str, token: &str, title: &str) -> String {
    let response = client
        .post(format!("{}/auctions", base))
        .bearer_auth(token)
        .json(&json!({
            "title": title,
            "startingBid": 100,
            "expiryDate": (Utc::now() + Duration::hours(2)).to_rfc3339(),
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let auctions: Vec<Value> = client
        .get(format!("{}/auctions", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    auctions
        .iter()
        .find(|a| a["title"] == title)
        .map(|a| a["_id"].as_str().unwrap().to_string())
        .unwrap()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_registration() {
    let base = setup().await;
    let client = Client::new();
    let creds = json!({ "email": format!("{}@example.com", unique("dup")), "password": "pw" });

    let first = client
        .post(format!("{}/register", base))
        .json(&creds)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = client
        .post(format!("{}/register", base))
        .json(&creds)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_place_bid() {
    let base = setup().await;
    let client = Client::new();
    let token = login(&client, &base).await;
    let auction_id = create_auction(&client, &base, &token, &unique("lamp")).await;

    let response = client
        .post(format!("{}/bids", base))
        .bearer_auth(&token)
        .json(&json!({ "auctionId": auction_id, "bidAmount": 150, "bidder": "ana" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let missing = client
        .post(format!("{}/bids", base))
        .bearer_auth(&token)
        .json(&json!({ "auctionId": Uuid::new_v4(), "bidAmount": 150, "bidder": "ana" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_bid_history() {
    let base = setup().await;
    let client = Client::new();
    let token = login(&client, &base).await;
    let title = unique("clock");
    let auction_id = create_auction(&client, &base, &token, &title).await;

    for (amount, bidder) in [(10, "X"), (20, "X"), (20, "Y")] {
        let response = client
            .post(format!("{}/bids", base))
            .bearer_auth(&token)
            .json(&json!({ "auctionId": auction_id, "bidAmount": amount, "bidder": bidder }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let history: Vec<Value> = client
        .get(format!("{}/bid-history", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows: Vec<(&str, f64, &str)> = history
        .iter()
        .filter(|r| r["auctionTitle"] == title.as_str())
        .map(|r| {
            (
                r["bidderName"].as_str().unwrap(),
                r["amount"].as_f64().unwrap(),
                r["status"].as_str().unwrap(),
            )
        })
        .collect();

    assert_eq!(rows, vec![("X", 20.0, "Won"), ("Y", 20.0, "Won")]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_email_in_store() {
    let store = connect().await;
    let email = format!("{}@example.com", unique("race"));

    store.insert_user(&email, "hash").await.unwrap();
    let err = store.insert_user(&email, "other-hash").await.unwrap_err();

    assert!(matches!(err, AppError::EmailTaken));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_bid_insert_with_dangling_references() {
    let store = connect().await;
    let user = store
        .insert_user(&format!("{}@example.com", unique("owner")), "hash")
        .await
        .unwrap();
    let auction = store
        .insert_auction(NewAuction {
            title: unique("mirror"),
            description: None,
            starting_bid: 5.0,
            expiry_date: Utc::now() + Duration::hours(1),
        })
        .await
        .unwrap();

    let err = store
        .insert_bid(NewBid {
            auction_id: Uuid::new_v4(),
            bid_amount: 10.0,
            bidder: "ana".to_string(),
            user_id: user.id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuctionNotFound));

    let err = store
        .insert_bid(NewBid {
            auction_id: auction.id,
            bid_amount: 10.0,
            bidder: "ana".to_string(),
            user_id: Uuid::new_v4(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidToken));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_bid_with_token_of_unknown_user() {
    let base = setup().await;
    let client = Client::new();
    let token = login(&client, &base).await;
    let auction_id = create_auction(&client, &base, &token, &unique("lamp")).await;

    let orphan = TokenService::new(SECRET, 3600)
        .issue(Uuid::new_v4())
        .unwrap();
    let response = client
        .post(format!("{}/bids", base))
        .bearer_auth(&orphan)
        .json(&json!({ "auctionId": auction_id, "bidAmount": 150, "bidder": "ana" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid Token");
}
