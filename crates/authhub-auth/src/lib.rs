//! # authhub-auth
//!
//! Token Provider for AuthHub: signed JWT issuance and validation for
//! access and refresh tokens.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
