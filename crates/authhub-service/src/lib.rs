//! # authhub-service
//!
//! Business logic services for AuthHub: the authorization flows
//! (sign-up, sign-in, access-token reissue) and admin image storage.

pub mod authorization;
pub mod image;
