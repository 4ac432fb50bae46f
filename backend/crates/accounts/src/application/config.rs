//! Application Configuration
//!
//! Configuration for the Accounts application layer. The signing secret and
//! pepper are injected here at construction time and are immutable
//! afterwards; business logic never reads ambient global state.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

use crate::application::session_token::SessionTokenService;

/// The one and only insecure fallback signing secret.
///
/// Reachable exclusively through [`AccountsConfig::development`]; release
/// startup requires an explicit secret from the environment and never
/// touches this constant.
pub const DEV_TOKEN_SECRET: [u8; 32] = *b"insecure-dev-token-secret-32byte";

/// Default session token lifetime (1 week)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Credential-carrier cookie settings (name defaults to `token`)
    pub cookie: CookieConfig,
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Session token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig {
                max_age_secs: Some(DEFAULT_TOKEN_TTL.as_secs() as i64),
                ..CookieConfig::default()
            },
            token_secret: [0u8; 32],
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }
}

impl AccountsConfig {
    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, fixed dev secret)
    pub fn development() -> Self {
        Self {
            cookie: CookieConfig {
                secure: false,
                max_age_secs: Some(DEFAULT_TOKEN_TTL.as_secs() as i64),
                ..CookieConfig::default()
            },
            token_secret: DEV_TOKEN_SECRET,
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build the token service configured with this secret and ttl
    pub fn token_service(&self) -> SessionTokenService {
        SessionTokenService::new(self.token_secret, self.token_ttl)
    }
}
