use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An auction listing as stored and as returned by `GET /auctions`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub starting_bid: f64,
    pub current_bid: f64,
    pub expiry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A validated listing ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewAuction {
    pub title: String,
    pub description: Option<String>,
    pub starting_bid: f64,
    pub expiry_date: DateTime<Utc>,
}
