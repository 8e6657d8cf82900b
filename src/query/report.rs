//! Bid-history report.
//!
//! Collapses every bidder's bids on an auction down to their best one, then
//! labels each best bid against the highest amount placed on that auction.
//! Bidders tied on the highest amount all win.

// region:    --- Imports
use super::model::{BidHistoryEntry, BidStatus, BidWithAuction};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Report

/// Builds the report from bids in placement order.
///
/// Rows are sorted by auction title ascending, then amount descending, then
/// bidder name. The row id is the id of the bid that reached the bidder's best
/// amount; when a bidder repeated that amount, the earliest such bid is kept.
pub fn build_bid_history(bids: &[BidWithAuction]) -> Vec<BidHistoryEntry> {
    let best = best_bid_per_bidder(bids);
    let winning = winning_amount_per_title(&best);

    let mut rows: Vec<BidHistoryEntry> = best
        .into_iter()
        .map(|bid| {
            let status = match winning.get(bid.auction_title.as_str()) {
                Some(&top) if bid.bid_amount == top => BidStatus::Won,
                _ => BidStatus::Lost,
            };
            BidHistoryEntry {
                id: bid.id,
                bidder_name: bid.bidder.clone(),
                auction_title: bid.auction_title.clone(),
                amount: bid.bid_amount,
                status,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.auction_title
            .cmp(&b.auction_title)
            .then_with(|| b.amount.total_cmp(&a.amount))
            .then_with(|| a.bidder_name.cmp(&b.bidder_name))
    });
    rows
}

/// One record per (auction, bidder): the bid carrying the highest amount.
fn best_bid_per_bidder(bids: &[BidWithAuction]) -> Vec<&BidWithAuction> {
    let mut best: Vec<&BidWithAuction> = Vec::new();
    let mut slots: HashMap<(Uuid, &str), usize> = HashMap::new();

    for bid in bids {
        match slots.entry((bid.auction_id, bid.bidder.as_str())) {
            Entry::Occupied(slot) => {
                let current = &mut best[*slot.get()];
                if bid.bid_amount > current.bid_amount {
                    *current = bid;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(best.len());
                best.push(bid);
            }
        }
    }
    best
}

/// Auctions are grouped by title here, so two listings sharing a title share
/// one winning amount.
fn winning_amount_per_title<'a>(best: &[&'a BidWithAuction]) -> HashMap<&'a str, f64> {
    let mut winning: HashMap<&str, f64> = HashMap::new();
    for &bid in best {
        winning
            .entry(bid.auction_title.as_str())
            .and_modify(|top| {
                if bid.bid_amount > *top {
                    *top = bid.bid_amount;
                }
            })
            .or_insert(bid.bid_amount);
    }
    winning
}

// endregion: --- Report

// endregion: --- Tests
