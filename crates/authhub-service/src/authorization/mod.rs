//! Authorization flows: sign-up, sign-in, and access-token reissue.

pub mod dto;
pub mod service;

pub use dto::{
    AccessTokenResponse, ReissueAccessTokenRequest, SignInRequest, SignUpRequest, TokenResponse,
};
pub use service::AuthorizationService;
