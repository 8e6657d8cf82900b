use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single amount submitted against an auction.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub auction_id: Uuid,
    pub bid_amount: f64,
    pub bidder: String,
    pub user_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// A validated bid ready to be persisted. The timestamp is assigned by the
/// store.
#[derive(Debug, Clone)]
pub struct NewBid {
    pub auction_id: Uuid,
    pub bid_amount: f64,
    pub bidder: String,
    pub user_id: Uuid,
}
