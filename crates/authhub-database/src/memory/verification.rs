//! In-memory email verification store using a Tokio RwLock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use authhub_core::result::AppResult;
use authhub_entity::verification::EmailVerification;

use crate::store::VerificationStore;

/// In-memory verification store keyed by lowercased email.
#[derive(Debug, Clone, Default)]
pub struct MemoryVerificationStore {
    /// Protected verification map.
    verifications: Arc<RwLock<HashMap<String, EmailVerification>>>,
}

impl MemoryVerificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VerificationStore for MemoryVerificationStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<EmailVerification>> {
        Ok(self
            .verifications
            .read()
            .await
            .get(&email.to_lowercase())
            .cloned())
    }

    async fn create(&self, verification: &EmailVerification) -> AppResult<()> {
        self.verifications
            .write()
            .await
            .insert(verification.email.to_lowercase(), verification.clone());
        Ok(())
    }

    async fn delete(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .verifications
            .write()
            .await
            .remove(&email.to_lowercase())
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_reports_whether_record_existed() {
        let store = MemoryVerificationStore::new();
        store
            .create(&EmailVerification::new("a@x.com", true))
            .await
            .unwrap();

        assert!(store.delete("A@x.com").await.unwrap());
        assert!(!store.delete("a@x.com").await.unwrap());
        assert!(store.find_by_email("a@x.com").await.unwrap().is_none());
    }
}
