//! Email verification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One-time proof that an email address was confirmed.
///
/// Created by the external verification flow and consumed (read then
/// deleted) exactly once during sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailVerification {
    /// Unique record identifier.
    pub id: Uuid,
    /// The email address this record belongs to.
    pub email: String,
    /// Whether the address has been confirmed.
    pub verified: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl EmailVerification {
    /// Build a fresh record for the given address.
    pub fn new(email: impl Into<String>, verified: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            verified,
            created_at: now,
            updated_at: now,
        }
    }
}
