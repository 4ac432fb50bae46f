//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure
//! layer. Each write is a single atomic statement at the store; ownership
//! checks live in the application layer, which loads before it writes.

use crate::domain::entities::{Booking, BookingWithPlace, Place};
use crate::domain::value_objects::{PlaceId, UserId};
use crate::error::RentalsResult;

/// Place repository trait
#[trait_variant::make(PlaceRepository: Send)]
pub trait LocalPlaceRepository {
    /// Persist a new place
    async fn create(&self, place: &Place) -> RentalsResult<()>;

    /// Find a place by ID
    async fn find_by_id(&self, place_id: &PlaceId) -> RentalsResult<Option<Place>>;

    /// List every place (public directory listing)
    async fn list_all(&self) -> RentalsResult<Vec<Place>>;

    /// List places owned by a user
    async fn list_by_owner(&self, owner: &UserId) -> RentalsResult<Vec<Place>>;

    /// Replace a place's editable fields (single atomic write)
    async fn update(&self, place: &Place) -> RentalsResult<()>;
}

/// Booking repository trait
#[trait_variant::make(BookingRepository: Send)]
pub trait LocalBookingRepository {
    /// Persist a new booking
    async fn create(&self, booking: &Booking) -> RentalsResult<()>;

    /// List a user's bookings, each joined with its place
    async fn list_by_user(&self, user: &UserId) -> RentalsResult<Vec<BookingWithPlace>>;
}
