//! Registration, login and session-token checks.
//!
//! - `password`: bcrypt hashing on the blocking pool
//! - `token`: signed session tokens with a fixed lifetime
//! - `service`: register / login over a [`crate::store::UserStore`]
//! - `extract`: bearer-token extractor for protected handlers
pub mod extract;
pub mod model;
pub mod password;
pub mod service;
pub mod token;

pub use extract::AuthenticatedUser;
pub use service::AuthService;
pub use token::TokenService;
