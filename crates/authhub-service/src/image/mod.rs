//! Admin image file storage.

pub mod manager;

pub use manager::ImageManager;
