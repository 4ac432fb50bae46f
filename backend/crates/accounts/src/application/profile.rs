//! Profile Use Case
//!
//! Loads the account behind a resolved identity. "No session" is a valid
//! profile state, not an error - the handler returns null for anonymous
//! callers without reaching this use case.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::identity::Identity;
use crate::error::AccountsResult;

/// Profile use case
pub struct ProfileUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// Load the user for a verified identity
    ///
    /// Returns `None` when the token is genuine but the account no longer
    /// exists, which callers treat the same as no session.
    pub async fn execute(&self, identity: &Identity) -> AccountsResult<Option<User>> {
        self.user_repo.find_by_id(&identity.user_id).await
    }
}
