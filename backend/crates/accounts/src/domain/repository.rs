//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AccountsResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AccountsResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool>;
}
