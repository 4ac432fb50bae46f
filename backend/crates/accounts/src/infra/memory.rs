//! In-Memory Repository Implementation
//!
//! Store-agnostic double used by tests and local demos. Enforces the same
//! email-uniqueness invariant the database schema does.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AccountsError, AccountsResult};

/// In-memory accounts repository
#[derive(Clone, Default)]
pub struct MemAccountsRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemAccountsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemAccountsRepository {
    async fn create(&self, user: &User) -> AccountsResult<()> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AccountsError::EmailTaken);
        }

        users.insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| &u.email == email))
    }
}
