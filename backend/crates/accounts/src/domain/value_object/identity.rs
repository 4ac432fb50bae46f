//! Identity Value Object
//!
//! The authenticated (user id, email) pair derived from a verified session
//! token. This is the only form in which request handlers learn who the
//! caller is; repositories take ownership fields from it, never from
//! client-supplied payloads.

use crate::domain::value_object::{email::Email, user_id::UserId};

/// Verified caller identity
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub email: Email,
}

/// The caller of a request: authenticated or not
///
/// Absence of a credential carrier and any token verification failure both
/// resolve to `Anonymous`; handlers that need identity decide what that
/// means for them (401 for mutations, a null profile for `/profile`).
#[derive(Debug, Clone)]
pub enum Caller {
    Identified(Identity),
    Anonymous,
}

impl Caller {
    /// Consume the caller, yielding the identity if present
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Caller::Identified(identity) => Some(identity),
            Caller::Anonymous => None,
        }
    }

    /// Whether the caller is authenticated
    pub fn is_identified(&self) -> bool {
        matches!(self, Caller::Identified(_))
    }
}
