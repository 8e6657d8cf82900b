/// Create a user
pub const INSERT_USER: &str = r#"
    INSERT INTO users (id, email, password_hash, created_at)
    VALUES ($1, $2, $3, $4)
    RETURNING id, email, password_hash, created_at
"#;

/// Look up a user by email
pub const GET_USER_BY_EMAIL: &str =
    "SELECT id, email, password_hash, created_at FROM users WHERE email = $1";

/// Create an auction; current_bid starts at zero
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (id, title, description, starting_bid, current_bid, expiry_date, created_at)
    VALUES ($1, $2, $3, $4, 0, $5, $6)
    RETURNING id, title, description, starting_bid, current_bid, expiry_date, created_at
"#;

/// All auctions, oldest first
pub const GET_ALL_AUCTIONS: &str = r#"
    SELECT id, title, description, starting_bid, current_bid, expiry_date, created_at
    FROM auctions
    ORDER BY created_at ASC, id ASC
"#;

/// Whether an auction exists
pub const AUCTION_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM auctions WHERE id = $1)";

/// Create a bid
pub const INSERT_BID: &str = r#"
    INSERT INTO bids (id, auction_id, bid_amount, bidder, user_id, timestamp)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, auction_id, bid_amount, bidder, user_id, timestamp
"#;

/// Bids joined with their auction title, in placement order
pub const GET_BIDS_WITH_AUCTION: &str = r#"
    SELECT b.id, b.auction_id, a.title AS auction_title, b.bidder, b.bid_amount, b.timestamp
    FROM bids b
    JOIN auctions a ON a.id = b.auction_id
    ORDER BY b.timestamp ASC, b.id ASC
"#;
