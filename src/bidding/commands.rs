//! Bid placement.
// region:    --- Imports
use super::model::{Bid, NewBid};
use crate::error::AppError;
use crate::store::{AuctionStore, BidStore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Commands

/// Body of `POST /bids`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidCommand {
    pub auction_id: Option<String>,
    pub bid_amount: Option<f64>,
    pub bidder: Option<String>,
}

impl PlaceBidCommand {
    /// Checks presence first, then amount, then id format. A zero amount
    /// counts as missing.
    pub fn validate(self, user_id: Uuid) -> Result<NewBid, AppError> {
        let bidder = self
            .bidder
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        let (Some(auction_id), Some(bid_amount), Some(bidder)) =
            (self.auction_id, self.bid_amount, bidder)
        else {
            return Err(AppError::validation("Missing required fields"));
        };
        if auction_id.is_empty() || bid_amount == 0.0 {
            return Err(AppError::validation("Missing required fields"));
        }

        if !bid_amount.is_finite() || bid_amount < 0.0 {
            return Err(AppError::validation("Bid amount must be positive"));
        }

        let auction_id = Uuid::parse_str(&auction_id)
            .map_err(|_| AppError::validation("Invalid auctionId format"))?;

        Ok(NewBid {
            auction_id,
            bid_amount,
            bidder,
            user_id,
        })
    }
}

/// Places a bid on behalf of the authenticated user.
///
/// The existence check and the insert are two separate store calls.
pub async fn handle_place_bid<S>(
    cmd: PlaceBidCommand,
    user_id: Uuid,
    store: &S,
) -> Result<Bid, AppError>
where
    S: AuctionStore + BidStore + ?Sized,
{
    info!("{:<12} --> Place bid: {:?}", "Command", cmd);
    let new_bid = cmd.validate(user_id)?;

    if !store.auction_exists(new_bid.auction_id).await? {
        warn!(
            "{:<12} --> Auction not found: {}",
            "Command", new_bid.auction_id
        );
        return Err(AppError::AuctionNotFound);
    }

    let bid = store.insert_bid(new_bid).await?;
    info!(
        "{:<12} --> Bid placed: id={}, amount={}",
        "Command", bid.id, bid.bid_amount
    );
    Ok(bid)
}

// endregion: --- Commands

// endregion: --- Tests
