//! Email verification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;
use authhub_entity::verification::EmailVerification;

use crate::store::VerificationStore;

/// PostgreSQL-backed email verification store.
#[derive(Debug, Clone)]
pub struct VerificationRepository {
    pool: PgPool,
}

impl VerificationRepository {
    /// Create a new verification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerificationStore for VerificationRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<EmailVerification>> {
        sqlx::query_as::<_, EmailVerification>(
            "SELECT * FROM email_verifications WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find verification", e)
        })
    }

    async fn create(&self, verification: &EmailVerification) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO email_verifications (id, email, verified, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (LOWER(email)) DO UPDATE \
             SET verified = EXCLUDED.verified, updated_at = EXCLUDED.updated_at",
        )
        .bind(verification.id)
        .bind(&verification.email)
        .bind(verification.verified)
        .bind(verification.created_at)
        .bind(verification.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create verification", e)
        })?;
        Ok(())
    }

    async fn delete(&self, email: &str) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM email_verifications WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete verification", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
