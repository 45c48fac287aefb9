//! Request and response shapes for the authorization flows.

use serde::{Deserialize, Serialize};

/// Data submitted to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Email address; must have a verified email verification record.
    pub email: String,
    /// Opaque sign-in credential.
    pub password: String,
    /// Display name (optional).
    pub display_name: Option<String>,
}

/// Credentials submitted to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Email address.
    pub email: String,
    /// Opaque sign-in credential.
    pub password: String,
}

/// Refresh token submitted to obtain a fresh access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReissueAccessTokenRequest {
    /// The refresh token issued at the last sign-in or sign-up.
    pub refresh_token: String,
}

/// Token pair returned by sign-up and sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// Single access token returned by reissue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Short-lived access token.
    pub access_token: String,
}
