use crate::error::AppError;
use tracing::error;

/// Hashes a password with bcrypt. Runs on the blocking pool since bcrypt is
/// deliberately slow.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("hash task failed: {}", e)))?
        .map_err(|e| {
            error!("{:<12} --> Password hashing failed: {:?}", "Auth", e);
            AppError::Internal(e.to_string())
        })
}

/// Returns whether `password` matches the stored bcrypt hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("verify task failed: {}", e)))?
        .map_err(|e| {
            error!("{:<12} --> Password verification failed: {:?}", "Auth", e);
            AppError::Internal(e.to_string())
        })
}
