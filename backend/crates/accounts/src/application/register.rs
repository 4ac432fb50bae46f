//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountsError, AccountsResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountsResult<User> {
        let name = DisplayName::new(input.name)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;

        // Email uniqueness invariant
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AccountsError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;
        let password = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        let user = User::new(name, email, password);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(user)
    }
}
