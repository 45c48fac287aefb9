//! # authhub-database
//!
//! PostgreSQL connection management, the store traits consumed by the
//! service layer, and their Postgres and in-memory implementations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{UserStore, VerificationStore};
