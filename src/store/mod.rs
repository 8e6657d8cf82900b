//! Persistence seams. Each component talks to its own trait; the server wires
//! a single backend that implements all of them.
pub mod in_memory;
pub mod postgres;
mod queries;

// region:    --- Imports
use crate::auction::model::{Auction, NewAuction};
use crate::auth::model::User;
use crate::bidding::model::{Bid, NewBid};
use crate::error::AppError;
use crate::query::model::BidWithAuction;
use async_trait::async_trait;
use uuid::Uuid;

pub use in_memory::InMemoryStore;
pub use postgres::PostgresStore;

// endregion: --- Imports

// region:    --- Store Traits

/// Credential store. Email is unique.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`AppError::EmailTaken`] when the email already exists.
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait AuctionStore: Send + Sync {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, AppError>;

    async fn list_auctions(&self) -> Result<Vec<Auction>, AppError>;

    async fn auction_exists(&self, id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
pub trait BidStore: Send + Sync {
    async fn insert_bid(&self, bid: NewBid) -> Result<Bid, AppError>;

    /// Every bid whose auction exists, paired with that auction's title, in
    /// placement order.
    async fn list_bids_with_auction(&self) -> Result<Vec<BidWithAuction>, AppError>;
}

/// Everything the HTTP layer needs from a backend.
pub trait Store: UserStore + AuctionStore + BidStore {}

impl<T> Store for T where T: UserStore + AuctionStore + BidStore {}

// endregion: --- Store Traits
