//! Identity Resolver
//!
//! Derives the caller's identity from the incoming request's credential
//! carrier (the `token` cookie). Every external input is untrusted here:
//! a missing cookie, an empty value, and any token verification failure
//! all resolve to [`Caller::Anonymous`] - never to a fault that could
//! escape a handler.

use axum::http::HeaderMap;

use crate::application::config::AccountsConfig;
use crate::application::session_token::SessionTokenService;
use crate::domain::value_object::{
    email::Email,
    identity::{Caller, Identity},
    user_id::UserId,
};

/// Resolves request headers into a [`Caller`]
#[derive(Clone)]
pub struct IdentityResolver {
    cookie_name: String,
    service: SessionTokenService,
}

impl IdentityResolver {
    pub fn new(config: &AccountsConfig) -> Self {
        Self {
            cookie_name: config.cookie.name.clone(),
            service: config.token_service(),
        }
    }

    /// Resolve the caller from request headers
    pub fn resolve(&self, headers: &HeaderMap) -> Caller {
        let Some(token) = platform::cookie::extract_cookie(headers, &self.cookie_name) else {
            return Caller::Anonymous;
        };

        // Logout replaces the cookie with an empty value
        if token.is_empty() {
            return Caller::Anonymous;
        }

        match self.service.verify(&token) {
            Ok(claims) => Caller::Identified(Identity {
                user_id: UserId::from_uuid(claims.sub),
                email: Email::from_db(claims.email),
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                Caller::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    fn resolver() -> (IdentityResolver, AccountsConfig) {
        let config = AccountsConfig::with_random_secret();
        (IdentityResolver::new(&config), config)
    }

    fn cookie_headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("token={}", value)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_no_cookie_is_anonymous() {
        let (resolver, _) = resolver();
        assert!(!resolver.resolve(&HeaderMap::new()).is_identified());
    }

    #[test]
    fn test_empty_cookie_is_anonymous() {
        let (resolver, _) = resolver();
        assert!(!resolver.resolve(&cookie_headers("")).is_identified());
    }

    #[test]
    fn test_garbage_token_is_anonymous_not_a_fault() {
        let (resolver, _) = resolver();
        assert!(!resolver.resolve(&cookie_headers("not.a.token")).is_identified());
    }

    #[test]
    fn test_valid_token_is_identified() {
        let (resolver, config) = resolver();
        let user_id = UserId::new();
        let email = Email::from_db("guest@example.com");
        let token = config.token_service().issue(&user_id, &email);

        let caller = resolver.resolve(&cookie_headers(&token));
        let identity = caller.into_identity().unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email.as_str(), "guest@example.com");
    }

    #[test]
    fn test_foreign_secret_token_is_anonymous() {
        let (resolver, _) = resolver();
        let other = AccountsConfig::with_random_secret();
        let token = other
            .token_service()
            .issue(&UserId::new(), &Email::from_db("guest@example.com"));

        assert!(!resolver.resolve(&cookie_headers(&token)).is_identified());
    }
}
