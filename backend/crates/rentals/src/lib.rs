//! Rentals (Places & Bookings) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Listings ("places") with owner-only mutation
//! - Reservations ("bookings") always attributed to the requester
//! - Public place directory; all booking reads scoped to the caller
//!
//! ## Authorization Model
//! - Identity is resolved by the accounts crate from the `token` cookie
//! - The stored owner is compared on every mutation; a mismatch is an
//!   observable 403, never a silent no-op
//! - Booking totals are recomputed server-side from the nightly rate

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{RentalsError, RentalsResult};
pub use infra::postgres::PgRentalsRepository;
pub use presentation::router::rentals_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
