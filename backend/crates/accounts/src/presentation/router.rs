//! Accounts Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAccountsRepository;
use crate::presentation::handlers::{self, AccountsAppState};

/// Create the accounts router with PostgreSQL repository
pub fn accounts_router(repo: PgAccountsRepository, config: AccountsConfig) -> Router {
    accounts_router_generic(repo, config)
}

/// Create a generic accounts router for any repository implementation
pub fn accounts_router_generic<R>(repo: R, config: AccountsConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState::new(repo, config);

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/profile", get(handlers::profile::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}
