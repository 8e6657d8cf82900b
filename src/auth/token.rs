// region:    --- Imports
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Claims

/// Payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: Uuid,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expires at (Unix seconds)
    pub exp: u64,
}

// endregion: --- Claims

// region:    --- Token Service

/// Signs and verifies HS256 session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second its lifetime ends.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token as if it had been signed at `issued_at`.
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            id: user_id,
            iat: issued_at.timestamp().max(0) as u64,
            exp: (issued_at + self.ttl).timestamp().max(0) as u64,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {}", e)))
    }

    /// Any failure (bad signature, malformed, expired) is reported as
    /// [`AppError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!("{:<12} --> Token rejected: {:?}", "Auth", e.kind());
                AppError::InvalidToken
            })
    }
}

// endregion: --- Token Service

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    #[test]
    fn issued_token_carries_the_user_id() {
        let user_id = Uuid::new_v4();
        let token = service().issue(user_id).unwrap();

        let claims = service().verify(&token).unwrap();
        assert_eq!(claims.id, user_id);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_is_accepted_within_the_hour() {
        let user_id = Uuid::new_v4();
        let token = service()
            .issue_at(user_id, Utc::now() - Duration::minutes(59))
            .unwrap();

        assert!(service().verify(&token).is_ok());
    }

    #[test]
    fn token_is_rejected_after_the_hour() {
        let token = service()
            .issue_at(Uuid::new_v4(), Utc::now() - Duration::minutes(61))
            .unwrap();

        assert!(matches!(
            service().verify(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = TokenService::new("other-secret", 3600)
            .issue(Uuid::new_v4())
            .unwrap();

        assert!(matches!(
            service().verify(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            service().verify("invalid.token.here"),
            Err(AppError::InvalidToken)
        ));
    }
}
// endregion: --- Tests
