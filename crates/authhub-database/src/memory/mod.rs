//! In-memory store implementations.
//!
//! Suitable for tests and single-node development; production uses the
//! PostgreSQL repositories.

pub mod user;
pub mod verification;

pub use user::MemoryUserStore;
pub use verification::MemoryVerificationStore;
