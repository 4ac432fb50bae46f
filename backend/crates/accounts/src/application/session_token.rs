//! Session Token Service
//!
//! Issues and verifies the stateless signed token that attributes a request
//! to a user. The token is `base64url(claims JSON) "." base64url(HMAC)`,
//! signed with a server-held secret; the server keeps no session state and
//! re-derives the caller's identity from the token on every request.
//!
//! Verification is total: every failure mode maps to a [`TokenError`]
//! variant, so no malformed or forged token can escape as a fault.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_object::{email::Email, user_id::UserId};

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject - user UUID
    pub sub: Uuid,
    /// User email at issuance time
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds, exclusive)
    pub exp: i64,
}

/// Token verification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not two dot-separated base64url parts, or claims do not parse
    #[error("Session token is malformed")]
    Malformed,

    /// HMAC does not match the payload
    #[error("Session token signature is invalid")]
    SignatureInvalid,

    /// Claims parsed and signature matched, but the token is past `exp`
    #[error("Session token has expired")]
    Expired,
}

/// Stateless signed-token service
///
/// Constructed from an explicit secret and ttl; holds no other state.
#[derive(Clone)]
pub struct SessionTokenService {
    secret: [u8; 32],
    ttl: Duration,
}

impl SessionTokenService {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Issue a signed token binding the user id and email
    pub fn issue(&self, user_id: &UserId, email: &Email) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: *user_id.as_uuid(),
            email: email.as_str().to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        let payload_json =
            serde_json::to_vec(&claims).expect("token claims always serialize to JSON");
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload_json);

        let signature = self.sign(payload_b64.as_bytes());

        format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify a token and return its claims
    ///
    /// The signature is checked before the payload is trusted enough to
    /// parse; expiry is checked last, so `Expired` implies the token was
    /// otherwise genuine.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(TokenError::Malformed)?;

        if payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(TokenError::Malformed);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::SignatureInvalid)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}
