//! Store traits consumed by the service layer.
//!
//! The authorization service orchestrates against these seams so the same
//! flows run on PostgreSQL in production and on the in-memory stores in
//! tests and single-node development.

use async_trait::async_trait;
use uuid::Uuid;

use authhub_core::result::AppResult;
use authhub_entity::user::{CreateUser, User};
use authhub_entity::verification::EmailVerification;

/// Lookup and persistence of user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact (email, password) match.
    ///
    /// The password is an opaque credential compared verbatim; a miss does
    /// not reveal whether the email or the password was wrong.
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>>;

    /// Insert a new user, refresh token included, as one atomic write.
    ///
    /// Fails with `Conflict` when the email is already taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Overwrite the stored refresh token for a user.
    ///
    /// A single-statement write; under concurrent sign-ins the last writer
    /// wins and all previously issued refresh tokens become invalid.
    async fn update_refresh_token(&self, id: Uuid, refresh_token: &str) -> AppResult<()>;
}

/// Lookup and one-time consumption of email verification records.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Find a verification record by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<EmailVerification>>;

    /// Persist a verification record (used by the external verification flow).
    async fn create(&self, verification: &EmailVerification) -> AppResult<()>;

    /// Delete the verification record for an email.
    ///
    /// Returns `true` iff a record was actually removed.
    async fn delete(&self, email: &str) -> AppResult<bool>;
}
