//! Presentation Layer
//!
//! HTTP handlers, DTOs, identity resolution, and router.

pub mod dto;
pub mod handlers;
pub mod identity;
pub mod router;

pub use handlers::AccountsAppState;
pub use identity::IdentityResolver;
pub use router::{accounts_router, accounts_router_generic};
