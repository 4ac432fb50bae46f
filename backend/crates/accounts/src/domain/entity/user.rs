//! User Entity
//!
//! A registered account. Immutable after registration apart from a future
//! profile-edit path; never deleted. The password hash lives here but is
//! stripped before anything crosses the system boundary (response DTOs
//! carry no hash field).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: DisplayName,
    /// Email (unique across accounts)
    pub email: Email,
    /// Argon2id password hash (PHC string)
    pub password: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at registration time
    pub fn new(name: DisplayName, email: Email, password: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}
