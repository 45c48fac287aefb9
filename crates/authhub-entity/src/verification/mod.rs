//! Email verification domain entities.

pub mod model;

pub use model::EmailVerification;
