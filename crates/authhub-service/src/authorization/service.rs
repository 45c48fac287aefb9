//! Authorization service — sign-up, sign-in, and access-token reissue.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use authhub_auth::jwt::{JwtDecoder, JwtEncoder, TokenType};
use authhub_core::error::AppError;
use authhub_database::store::{UserStore, VerificationStore};
use authhub_entity::user::{CreateUser, UserRole};

use super::dto::{
    AccessTokenResponse, ReissueAccessTokenRequest, SignInRequest, SignUpRequest, TokenResponse,
};

/// Orchestrates the authorization flows against the stores and the token
/// provider. Each operation is atomic and independent; there is no
/// persistent state machine between calls.
#[derive(Clone)]
pub struct AuthorizationService {
    /// User persistence.
    users: Arc<dyn UserStore>,
    /// Email verification persistence.
    verifications: Arc<dyn VerificationStore>,
    /// Token creation.
    encoder: Arc<JwtEncoder>,
    /// Token validation.
    decoder: Arc<JwtDecoder>,
}

impl std::fmt::Debug for AuthorizationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationService").finish()
    }
}

impl AuthorizationService {
    /// Creates a new authorization service.
    pub fn new(
        users: Arc<dyn UserStore>,
        verifications: Arc<dyn VerificationStore>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            verifications,
            encoder,
            decoder,
        }
    }

    /// Registers a new account from a verified email address.
    ///
    /// 1. Look up the email verification record; `NotFound` if absent.
    /// 2. `NotVerified` if the record's verified flag is false.
    /// 3. Mint ACCESS and REFRESH tokens for a fresh user id and persist
    ///    the new user with the refresh token in the same insert.
    /// 4. Consume the verification record — one-time consumption prevents
    ///    replaying sign-up with a stale verification.
    ///
    /// The user insert is the commit point: a failed insert (taken email,
    /// store error) aborts the operation with the verification record
    /// intact, so the caller can retry without re-verifying.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<TokenResponse, AppError> {
        self.check_email_verification(&request.email).await?;

        let user_id = Uuid::new_v4();
        let tokens = self.encoder.create_token_pair(user_id)?;

        let user = self
            .users
            .create(&CreateUser {
                id: user_id,
                email: request.email,
                password: request.password,
                display_name: request.display_name,
                role: UserRole::Member,
                refresh_token: tokens.refresh_token.clone(),
            })
            .await?;

        // The user exists now; replay of this sign-up is already blocked by
        // the unique email, so a concurrently removed record is harmless.
        if !self.verifications.delete(&user.email).await? {
            warn!(user_id = %user.id, "Verification record was already removed");
        }

        info!(user_id = %user.id, "Sign-up completed");

        Ok(TokenResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Authenticates by exact (email, password) match and starts a new
    /// session.
    ///
    /// An unknown email and a wrong password surface the same `NotFound`
    /// failure, so callers cannot enumerate registered addresses. The newly
    /// minted refresh token overwrites the stored one, invalidating any
    /// prior session.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<TokenResponse, AppError> {
        let user = self
            .users
            .find_by_email_and_password(&request.email, &request.password)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let tokens = self.encoder.create_token_pair(user.id)?;
        self.users
            .update_refresh_token(user.id, &tokens.refresh_token)
            .await?;

        info!(user_id = %user.id, "Sign-in completed");

        Ok(TokenResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Mints a fresh access token from a valid refresh token.
    ///
    /// The presented token must decode (else `InvalidToken`, before any
    /// store lookup), the user must still exist (else `NotFound`), and the
    /// token must textually equal the user's stored refresh token (else
    /// `ExpiredToken` — it was superseded by a later sign-in or was never
    /// issued for this user). The stored refresh token is left unchanged.
    pub async fn reissue_access_token(
        &self,
        request: ReissueAccessTokenRequest,
    ) -> Result<AccessTokenResponse, AppError> {
        let user_id = self
            .decoder
            .user_id_from_token(&request.refresh_token, TokenType::Refresh)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !user.holds_refresh_token(&request.refresh_token) {
            return Err(AppError::expired_token("Refresh token has been superseded"));
        }

        let access_token = self.encoder.create_token(user_id, TokenType::Access)?;

        info!(user_id = %user_id, "Access token reissued");

        Ok(AccessTokenResponse { access_token })
    }

    /// Checks that a verified email verification record exists.
    async fn check_email_verification(&self, email: &str) -> Result<(), AppError> {
        let verification = self
            .verifications
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("No email verification for address"))?;

        if !verification.verified {
            return Err(AppError::not_verified("Email has not been verified"));
        }

        Ok(())
    }
}
