pub mod auction;
pub mod auth;
pub mod bidding;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod state;
pub mod store;
