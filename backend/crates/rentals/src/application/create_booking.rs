//! Create Booking Use Case
//!
//! Creates a reservation attributed to the authenticated caller. The
//! `user` field is forced to the requester regardless of anything the
//! client supplied, and the total price is recomputed server-side from the
//! place's nightly rate - a client total that disagrees is rejected rather
//! than trusted.

use std::sync::Arc;

use accounts::Identity;
use chrono::NaiveDate;

use crate::domain::entities::Booking;
use crate::domain::repository::{BookingRepository, PlaceRepository};
use crate::domain::value_objects::PlaceId;
use crate::error::{RentalsError, RentalsResult};

/// Create booking input
pub struct CreateBookingInput {
    pub place: PlaceId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub name: String,
    pub phone: String,
    /// Client-computed total, validated against the server-side figure
    pub price: i64,
}

/// Create booking use case
pub struct CreateBookingUseCase<P, B>
where
    P: PlaceRepository,
    B: BookingRepository,
{
    place_repo: Arc<P>,
    booking_repo: Arc<B>,
}

impl<P, B> CreateBookingUseCase<P, B>
where
    P: PlaceRepository,
    B: BookingRepository,
{
    pub fn new(place_repo: Arc<P>, booking_repo: Arc<B>) -> Self {
        Self {
            place_repo,
            booking_repo,
        }
    }

    pub async fn execute(
        &self,
        requester: &Identity,
        input: CreateBookingInput,
    ) -> RentalsResult<Booking> {
        let place = self
            .place_repo
            .find_by_id(&input.place)
            .await?
            .ok_or(RentalsError::PlaceNotFound)?;

        let nights = (input.check_out - input.check_in).num_days();
        if nights < 1 {
            return Err(RentalsError::InvalidStay(
                "check-out must be after check-in".to_string(),
            ));
        }

        if input.guests < 1 {
            return Err(RentalsError::InvalidStay(
                "at least one guest is required".to_string(),
            ));
        }

        if input.name.trim().is_empty() {
            return Err(RentalsError::Validation(
                "contact name cannot be empty".to_string(),
            ));
        }

        let expected = place.price * nights;
        if input.price != expected {
            return Err(RentalsError::PriceMismatch { expected });
        }

        // Attribution: the booking belongs to the verified requester
        let booking = Booking::new(
            requester.user_id,
            place.place_id,
            input.check_in,
            input.check_out,
            input.guests,
            input.name,
            input.phone,
            expected,
        );

        self.booking_repo.create(&booking).await?;

        tracing::info!(
            booking_id = %booking.booking_id,
            place_id = %booking.place,
            user = %booking.user,
            nights = nights,
            "Booking created"
        );

        Ok(booking)
    }
}
