// region:    --- Imports
use super::model::{Credentials, User};
use super::password::{hash_password, verify_password};
use super::token::{Claims, TokenService};
use crate::error::AppError;
use crate::store::UserStore;
use std::sync::Arc;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Auth Service

/// Registration, login and token checks over a credential store.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
    hash_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService, hash_cost: u32) -> Self {
        Self {
            users,
            tokens,
            hash_cost,
        }
    }

    /// Stores a new account. A taken email is a conflict, whether it is
    /// spotted here or by the store's unique constraint.
    pub async fn register(&self, credentials: Credentials) -> Result<User, AppError> {
        let (email, password) = required(credentials)?;
        info!("{:<12} --> Register: {}", "Auth", email);

        if self.users.find_user_by_email(&email).await?.is_some() {
            warn!("{:<12} --> Email already registered: {}", "Auth", email);
            return Err(AppError::EmailTaken);
        }

        let hash = hash_password(password, self.hash_cost).await?;
        self.users.insert_user(&email, &hash).await
    }

    /// Checks the credentials and issues a session token.
    pub async fn login(&self, credentials: Credentials) -> Result<String, AppError> {
        let (email, password) = required(credentials)?;
        info!("{:<12} --> Login: {}", "Auth", email);

        let user = self
            .users
            .find_user_by_email(&email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !verify_password(password, user.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        self.tokens.issue(user.id)
    }

    /// Decodes a bearer token into its claims.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token)
    }
}

fn required(credentials: Credentials) -> Result<(String, String), AppError> {
    let email = credentials
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    let password = credentials.password.filter(|p| !p.is_empty());
    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(AppError::validation("Email and password are required.")),
    }
}

// endregion: --- Auth Service

// endregion: --- Tests
