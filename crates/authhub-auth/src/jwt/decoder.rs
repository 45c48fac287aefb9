//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use authhub_core::config::auth::AuthConfig;
use authhub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens and extracts their claims.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token, verifying signature, expiry, and kind.
    pub fn decode_token(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_token("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_token("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => AppError::invalid_token(format!("Token validation failed: {e}")),
                }
            })?;

        let claims = token_data.claims;
        if claims.token_type != expected {
            let wanted = match expected {
                TokenType::Access => "access",
                TokenType::Refresh => "refresh",
            };
            return Err(AppError::invalid_token(format!(
                "Invalid token type: expected {wanted} token"
            )));
        }

        Ok(claims)
    }

    /// Verifies a token of the given kind and extracts the user id.
    pub fn user_id_from_token(&self, token: &str, expected: TokenType) -> Result<Uuid, AppError> {
        Ok(self.decode_token(token, expected)?.user_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
        }
    }

    #[test]
    fn test_roundtrip_both_kinds() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let pair = encoder.create_token_pair(user_id).unwrap();

        assert_eq!(
            decoder
                .user_id_from_token(&pair.access_token, TokenType::Access)
                .unwrap(),
            user_id
        );
        assert_eq!(
            decoder
                .user_id_from_token(&pair.refresh_token, TokenType::Refresh)
                .unwrap(),
            user_id
        );
    }

    #[test]
    fn test_wrong_kind_is_invalid() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let access = encoder
            .create_token(Uuid::new_v4(), TokenType::Access)
            .unwrap();
        let err = decoder
            .user_id_from_token(&access, TokenType::Refresh)
            .unwrap_err();
        assert_eq!(err.kind, authhub_core::error::ErrorKind::InvalidToken);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder
            .user_id_from_token(&token, TokenType::Refresh)
            .unwrap_err();
        assert_eq!(err.kind, authhub_core::error::ErrorKind::InvalidToken);
    }

    #[test]
    fn test_foreign_signature_is_invalid() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let other = AuthConfig {
            jwt_secret: "some-other-secret".to_string(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let token = encoder
            .create_token(Uuid::new_v4(), TokenType::Refresh)
            .unwrap();
        let err = decoder
            .user_id_from_token(&token, TokenType::Refresh)
            .unwrap_err();
        assert_eq!(err.kind, authhub_core::error::ErrorKind::InvalidToken);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let decoder = JwtDecoder::new(&test_config());
        let err = decoder
            .user_id_from_token("not-a-jwt", TokenType::Refresh)
            .unwrap_err();
        assert_eq!(err.kind, authhub_core::error::ErrorKind::InvalidToken);
    }
}
