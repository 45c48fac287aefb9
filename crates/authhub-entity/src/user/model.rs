//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique email address used for sign-in.
    pub email: String,
    /// Opaque sign-in credential, matched verbatim by the store.
    #[serde(skip_serializing)]
    pub password: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Assigned role.
    pub role: UserRole,
    /// The single currently valid refresh token, if any.
    ///
    /// Overwritten on every sign-in; a refresh token is accepted for
    /// access-token reissue only while it equals this value.
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the given refresh token is the currently valid one.
    pub fn holds_refresh_token(&self, refresh_token: &str) -> bool {
        self.refresh_token.as_deref() == Some(refresh_token)
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
///
/// The id and the initial refresh token are supplied by the caller so the
/// insert can be a single atomic statement; a user row never exists without
/// its refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Pre-generated user identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Opaque sign-in credential.
    pub password: String,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Assigned role.
    pub role: UserRole,
    /// Refresh token minted for this user before the insert.
    pub refresh_token: String,
}
