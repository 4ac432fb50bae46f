//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::RentalsAppState;
pub use router::{rentals_router, rentals_router_generic};
