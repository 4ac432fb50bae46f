//! Login Use Case
//!
//! Authenticates a user by email and password and mints a session token.
//!
//! Unknown email and wrong password are deliberately distinguishable
//! outcomes (404 vs 422) - the public wire contract exposes both.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AccountsError, AccountsResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// The authenticated user (handlers scrub the hash via the DTO)
    pub user: User,
    /// Signed session token for the credential-carrier cookie
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountsResult<LoginOutput> {
        // An address that does not even parse cannot belong to any account
        let email = Email::new(input.email).map_err(|_| AccountsError::EmailNotFound)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountsError::EmailNotFound)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AccountsError::IncorrectPassword)?;

        if !user.password.verify(&raw_password, self.config.pepper()) {
            return Err(AccountsError::IncorrectPassword);
        }

        let token = self.config.token_service().issue(&user.user_id, &user.email);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { user, token })
    }
}
