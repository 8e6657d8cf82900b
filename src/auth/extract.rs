// region:    --- Imports
use crate::error::AppError;
use crate::state::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Authenticated User

/// Identity decoded from the request's bearer token.
///
/// Taking this as a handler argument guards the route: no token is a 401,
/// a bad or expired token is a 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::MissingToken)?;
        let claims = state.auth.authenticate(token)?;
        Ok(AuthenticatedUser { user_id: claims.id })
    }
}

/// The second whitespace-separated part of the `Authorization` header.
///
/// The scheme is not checked: `Token abc` yields `abc`, which then fails
/// verification as an invalid token rather than a missing one.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    value.split_whitespace().nth(1)
}

// endregion: --- Authenticated User

// endregion: --- Tests
