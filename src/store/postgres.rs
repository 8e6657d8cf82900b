// region:    --- Imports
use super::queries;
use super::{AuctionStore, BidStore, UserStore};
use crate::auction::model::{Auction, NewAuction};
use crate::auth::model::User;
use crate::bidding::model::{Bid, NewBid};
use crate::error::AppError;
use crate::query::model::BidWithAuction;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Postgres Store

/// Foreign keys on `bids`, named in `sql/01-create-schema.sql`.
const BIDS_AUCTION_FK: &str = "bids_auction_id_fkey";
const BIDS_USER_FK: &str = "bids_user_id_fkey";

/// Store backed by the shared PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: Arc<PgPool>,
}

impl PostgresStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        info!("{:<12} --> Insert user: {}", "Query", email);
        sqlx::query_as::<_, User>(queries::INSERT_USER)
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(password_hash)
            .bind(Utc::now())
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| {
                let duplicate = e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation());
                if duplicate {
                    AppError::EmailTaken
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        info!("{:<12} --> Find user by email: {}", "Query", email);
        let user = sqlx::query_as::<_, User>(queries::GET_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl AuctionStore for PostgresStore {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, AppError> {
        info!("{:<12} --> Insert auction: {}", "Query", auction.title);
        let auction = sqlx::query_as::<_, Auction>(queries::INSERT_AUCTION)
            .bind(Uuid::new_v4())
            .bind(&auction.title)
            .bind(&auction.description)
            .bind(auction.starting_bid)
            .bind(auction.expiry_date)
            .bind(Utc::now())
            .fetch_one(&*self.pool)
            .await?;
        Ok(auction)
    }

    async fn list_auctions(&self) -> Result<Vec<Auction>, AppError> {
        info!("{:<12} --> List auctions", "Query");
        let auctions = sqlx::query_as::<_, Auction>(queries::GET_ALL_AUCTIONS)
            .fetch_all(&*self.pool)
            .await?;
        Ok(auctions)
    }

    async fn auction_exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(queries::AUCTION_EXISTS)
            .bind(id)
            .fetch_one(&*self.pool)
            .await?;
        Ok(exists)
    }
}

#[async_trait]
impl BidStore for PostgresStore {
    async fn insert_bid(&self, bid: NewBid) -> Result<Bid, AppError> {
        info!(
            "{:<12} --> Insert bid: auction={}, amount={}",
            "Query", bid.auction_id, bid.bid_amount
        );
        let bid = sqlx::query_as::<_, Bid>(queries::INSERT_BID)
            .bind(Uuid::new_v4())
            .bind(bid.auction_id)
            .bind(bid.bid_amount)
            .bind(&bid.bidder)
            .bind(bid.user_id)
            .bind(Utc::now())
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| {
                let dangling = e
                    .as_database_error()
                    .filter(|db| db.is_foreign_key_violation())
                    .and_then(|db| dangling_reference_error(db.constraint()));
                dangling.unwrap_or(AppError::Database(e))
            })?;
        Ok(bid)
    }

    async fn list_bids_with_auction(&self) -> Result<Vec<BidWithAuction>, AppError> {
        info!("{:<12} --> List bids with auction", "Query");
        let rows = sqlx::query_as::<_, BidWithAuction>(queries::GET_BIDS_WITH_AUCTION)
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows)
    }
}

/// Error for a bid insert that broke one of the `bids` foreign keys.
fn dangling_reference_error(constraint: Option<&str>) -> Option<AppError> {
    match constraint {
        // The auction vanished between the existence check and the insert.
        Some(BIDS_AUCTION_FK) => Some(AppError::AuctionNotFound),
        // Signed token, but its user row is gone.
        Some(BIDS_USER_FK) => Some(AppError::InvalidToken),
        _ => None,
    }
}

// endregion: --- Postgres Store

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_auction_reference_is_not_found() {
        assert!(matches!(
            dangling_reference_error(Some("bids_auction_id_fkey")),
            Some(AppError::AuctionNotFound)
        ));
    }

    #[test]
    fn missing_user_reference_is_an_invalid_token() {
        assert!(matches!(
            dangling_reference_error(Some("bids_user_id_fkey")),
            Some(AppError::InvalidToken)
        ));
    }

    #[test]
    fn other_constraints_stay_database_errors() {
        assert!(dangling_reference_error(Some("bids_pkey")).is_none());
        assert!(dangling_reference_error(None).is_none());
    }
}
// endregion: --- Tests
