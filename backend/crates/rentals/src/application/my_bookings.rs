//! My Bookings Use Case
//!
//! Lists the authenticated caller's bookings, each joined with its place.
//! Queries are always scoped to the requester; no booking is listable
//! cross-user.

use std::sync::Arc;

use accounts::Identity;

use crate::domain::entities::BookingWithPlace;
use crate::domain::repository::BookingRepository;
use crate::error::RentalsResult;

/// My bookings use case
pub struct MyBookingsUseCase<B>
where
    B: BookingRepository,
{
    booking_repo: Arc<B>,
}

impl<B> MyBookingsUseCase<B>
where
    B: BookingRepository,
{
    pub fn new(booking_repo: Arc<B>) -> Self {
        Self { booking_repo }
    }

    pub async fn execute(&self, requester: &Identity) -> RentalsResult<Vec<BookingWithPlace>> {
        self.booking_repo.list_by_user(&requester.user_id).await
    }
}
