// region:    --- Imports
use super::model::BidHistoryEntry;
use super::report::build_bid_history;
use crate::error::AppError;
use crate::store::BidStore;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// Bid-history report over every bid placed so far.
pub async fn get_bid_history<S>(store: &S) -> Result<Vec<BidHistoryEntry>, AppError>
where
    S: BidStore + ?Sized,
{
    let bids = store.list_bids_with_auction().await?;
    let history = build_bid_history(&bids);
    info!(
        "{:<12} --> Bid history: {} bids, {} rows",
        "Query",
        bids.len(),
        history.len()
    );
    Ok(history)
}

// endregion: --- Query Handlers
