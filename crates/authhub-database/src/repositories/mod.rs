//! PostgreSQL store implementations.

pub mod user;
pub mod verification;

pub use user::UserRepository;
pub use verification::VerificationRepository;
