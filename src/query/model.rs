use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bid paired with the title of the auction it was placed on.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BidWithAuction {
    pub id: Uuid,
    pub auction_id: Uuid,
    pub auction_title: String,
    pub bidder: String,
    pub bid_amount: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidStatus {
    Won,
    Lost,
}

/// One row of `GET /bid-history`: a bidder's best bid on one auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidHistoryEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub bidder_name: String,
    pub auction_title: String,
    pub amount: f64,
    pub status: BidStatus,
}
