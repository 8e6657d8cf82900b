// region:    --- Imports
use super::model::{Auction, NewAuction};
use crate::error::AppError;
use crate::store::AuctionStore;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

// endregion: --- Imports

// region:    --- Commands

/// Body of `POST /auctions`. Fields are optional so that a missing one is
/// reported as a validation error instead of a body rejection.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<f64>,
    /// RFC 3339, or a date / date-time without offset read as UTC.
    pub expiry_date: Option<String>,
}

impl CreateAuctionCommand {
    pub fn validate(self) -> Result<NewAuction, AppError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let expiry_date = self.expiry_date.filter(|d| !d.trim().is_empty());
        let (Some(title), Some(starting_bid), Some(expiry_date)) =
            (title, self.starting_bid, expiry_date)
        else {
            return Err(AppError::validation(
                "Title, starting bid and expiry date are required",
            ));
        };

        if !starting_bid.is_finite() || starting_bid < 0.0 {
            return Err(AppError::validation(
                "Starting bid must be a non-negative number",
            ));
        }

        let expiry_date =
            parse_expiry(&expiry_date).ok_or_else(|| AppError::validation("Invalid expiryDate"))?;

        Ok(NewAuction {
            title,
            description: self.description,
            starting_bid,
            expiry_date,
        })
    }
}

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Validates and persists a new listing.
pub async fn handle_create_auction<S>(
    cmd: CreateAuctionCommand,
    store: &S,
) -> Result<Auction, AppError>
where
    S: AuctionStore + ?Sized,
{
    info!("{:<12} --> Create auction: {:?}", "Command", cmd);
    let auction = store.insert_auction(cmd.validate()?).await?;
    info!("{:<12} --> Auction created: {}", "Command", auction.id);
    Ok(auction)
}

/// All listings, unfiltered.
pub async fn list_auctions<S>(store: &S) -> Result<Vec<Auction>, AppError>
where
    S: AuctionStore + ?Sized,
{
    store.list_auctions().await
}

// endregion: --- Commands

// endregion: --- Tests
