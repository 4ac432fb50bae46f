//! Accounts (Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration and login with email + password
//! - Stateless HMAC-signed session tokens carried in the `token` cookie
//! - Identity resolution shared with the rentals crate
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt per record (NIST SP 800-63B)
//! - Tokens carry (user id, email, iat, exp) claims; expiry is enforced
//! - Signing secret injected at construction; the insecure development
//!   fallback is quarantined in a single named constant

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use application::session_token::{SessionTokenService, TokenClaims, TokenError};
pub use domain::value_object::identity::{Caller, Identity};
pub use error::{AccountsError, AccountsResult};
pub use infra::postgres::PgAccountsRepository;
pub use presentation::identity::IdentityResolver;
pub use presentation::router::accounts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
