//! # authhub-entity
//!
//! Domain entity models for AuthHub: users and email verifications.

pub mod user;
pub mod verification;
