//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Filesystem settings for admin image storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory under which image files are written.
    #[serde(default = "default_image_root")]
    pub image_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            image_root: default_image_root(),
        }
    }
}

fn default_image_root() -> String {
    "data/images".to_string()
}
