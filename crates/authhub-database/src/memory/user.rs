//! In-memory user store using a Tokio RwLock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// In-memory user store keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Protected user map.
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Email is already registered"));
        }

        let now = Utc::now();
        let user = User {
            id: data.id,
            email: data.email.clone(),
            password: data.password.clone(),
            display_name: data.display_name.clone(),
            role: data.role,
            refresh_token: Some(data.refresh_token.clone()),
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_refresh_token(&self, id: Uuid, refresh_token: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.refresh_token = Some(refresh_token.to_string());
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authhub_entity::user::UserRole;

    fn create_data(email: &str) -> CreateUser {
        CreateUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password: "secret".to_string(),
            display_name: None,
            role: UserRole::Member,
            refresh_token: "initial-refresh".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_credentials() {
        let store = MemoryUserStore::new();
        let created = store.create(&create_data("a@x.com")).await.unwrap();

        let found = store
            .find_by_email_and_password("a@x.com", "secret")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.refresh_token.as_deref(), Some("initial-refresh"));

        let miss = store
            .find_by_email_and_password("a@x.com", "wrong")
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryUserStore::new();
        store.create(&create_data("a@x.com")).await.unwrap();

        let err = store.create(&create_data("A@X.COM")).await.unwrap_err();
        assert_eq!(err.kind, authhub_core::error::ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_update_refresh_token_overwrites() {
        let store = MemoryUserStore::new();
        let user = store.create(&create_data("a@x.com")).await.unwrap();

        store.update_refresh_token(user.id, "rotated").await.unwrap();

        let reloaded = store.find_by_id(user.id).await.unwrap().unwrap();
        assert!(reloaded.holds_refresh_token("rotated"));
        assert!(!reloaded.holds_refresh_token("initial-refresh"));
    }
}
