// region:    --- Imports
use super::{AuctionStore, BidStore, UserStore};
use crate::auction::model::{Auction, NewAuction};
use crate::auth::model::User;
use crate::bidding::model::{Bid, NewBid};
use crate::error::AppError;
use crate::query::model::BidWithAuction;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- In-Memory Store

/// Fake in-memory store.
///
/// Useful for tests; records live only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    auctions: Vec<Auction>,
    bids: Vec<Bid>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut tables = self.inner.write().await;
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::EmailTaken);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl AuctionStore for InMemoryStore {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, AppError> {
        let auction = Auction {
            id: Uuid::new_v4(),
            title: auction.title,
            description: auction.description,
            starting_bid: auction.starting_bid,
            current_bid: 0.0,
            expiry_date: auction.expiry_date,
            created_at: Utc::now(),
        };
        self.inner.write().await.auctions.push(auction.clone());
        Ok(auction)
    }

    async fn list_auctions(&self) -> Result<Vec<Auction>, AppError> {
        Ok(self.inner.read().await.auctions.clone())
    }

    async fn auction_exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.inner.read().await.auctions.iter().any(|a| a.id == id))
    }
}

#[async_trait]
impl BidStore for InMemoryStore {
    async fn insert_bid(&self, bid: NewBid) -> Result<Bid, AppError> {
        let mut tables = self.inner.write().await;
        if !tables.auctions.iter().any(|a| a.id == bid.auction_id) {
            return Err(AppError::AuctionNotFound);
        }
        let bid = Bid {
            id: Uuid::new_v4(),
            auction_id: bid.auction_id,
            bid_amount: bid.bid_amount,
            bidder: bid.bidder,
            user_id: bid.user_id,
            timestamp: Utc::now(),
        };
        tables.bids.push(bid.clone());
        Ok(bid)
    }

    async fn list_bids_with_auction(&self) -> Result<Vec<BidWithAuction>, AppError> {
        let tables = self.inner.read().await;
        let rows = tables
            .bids
            .iter()
            .filter_map(|bid| {
                tables
                    .auctions
                    .iter()
                    .find(|a| a.id == bid.auction_id)
                    .map(|auction| BidWithAuction {
                        id: bid.id,
                        auction_id: bid.auction_id,
                        auction_title: auction.title.clone(),
                        bidder: bid.bidder.clone(),
                        bid_amount: bid.bid_amount,
                        timestamp: bid.timestamp,
                    })
            })
            .collect();
        Ok(rows)
    }
}

// endregion: --- In-Memory Store

// endregion: --- Tests
