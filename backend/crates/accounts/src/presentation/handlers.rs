//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::set_cookie_header;

use crate::application::config::AccountsConfig;
use crate::application::{
    LoginInput, LoginUseCase, ProfileUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::identity::Caller;
use crate::error::AccountsResult;
use crate::presentation::dto::{LoginRequest, RegisterRequest, UserResponse};
use crate::presentation::identity::IdentityResolver;

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
    pub resolver: Arc<IdentityResolver>,
}

impl<R> AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AccountsConfig) -> Self {
        let resolver = Arc::new(IdentityResolver::new(&config));
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            resolver,
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountsResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    // Success - carry the token in the session cookie
    let cookie = set_cookie_header(&state.config.cookie, &output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(&output.user)),
    ))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /profile
///
/// An anonymous caller gets a JSON `null` body, not an error - the absence
/// of a session is a valid profile state.
pub async fn profile<R>(
    State(state): State<AccountsAppState<R>>,
    headers: HeaderMap,
) -> AccountsResult<Json<Option<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let identity = match state.resolver.resolve(&headers) {
        Caller::Identified(identity) => identity,
        Caller::Anonymous => return Ok(Json(None)),
    };

    let use_case = ProfileUseCase::new(state.repo.clone());
    let user = use_case.execute(&identity).await?;

    Ok(Json(user.as_ref().map(UserResponse::from)))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
///
/// Stateless sessions: logging out just clears the credential carrier.
pub async fn logout<R>(
    State(state): State<AccountsAppState<R>>,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie.build_clear_cookie();

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(true)))
}
