//! In-Memory Repository Implementation
//!
//! Store-agnostic double used by tests and local demos. Performs the same
//! join `list_by_user` does in SQL.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithPlace, Place};
use crate::domain::repository::{BookingRepository, PlaceRepository};
use crate::domain::value_objects::{PlaceId, UserId};
use crate::error::{RentalsError, RentalsResult};

/// In-memory rentals repository
#[derive(Clone, Default)]
pub struct MemRentalsRepository {
    places: Arc<RwLock<HashMap<Uuid, Place>>>,
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MemRentalsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaceRepository for MemRentalsRepository {
    async fn create(&self, place: &Place) -> RentalsResult<()> {
        let mut places = self.places.write().await;
        places.insert(place.place_id.into_uuid(), place.clone());
        Ok(())
    }

    async fn find_by_id(&self, place_id: &PlaceId) -> RentalsResult<Option<Place>> {
        let places = self.places.read().await;
        Ok(places.get(place_id.as_uuid()).cloned())
    }

    async fn list_all(&self) -> RentalsResult<Vec<Place>> {
        let places = self.places.read().await;
        Ok(places.values().cloned().collect())
    }

    async fn list_by_owner(&self, owner: &UserId) -> RentalsResult<Vec<Place>> {
        let places = self.places.read().await;
        Ok(places
            .values()
            .filter(|p| p.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn update(&self, place: &Place) -> RentalsResult<()> {
        let mut places = self.places.write().await;
        places.insert(place.place_id.into_uuid(), place.clone());
        Ok(())
    }
}

impl BookingRepository for MemRentalsRepository {
    async fn create(&self, booking: &Booking) -> RentalsResult<()> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.booking_id.into_uuid(), booking.clone());
        Ok(())
    }

    async fn list_by_user(&self, user: &UserId) -> RentalsResult<Vec<BookingWithPlace>> {
        let bookings = self.bookings.read().await;
        let places = self.places.read().await;

        bookings
            .values()
            .filter(|b| &b.user == user)
            .map(|b| {
                let place = places.get(b.place.as_uuid()).cloned().ok_or_else(|| {
                    RentalsError::Internal("booking references missing place".to_string())
                })?;
                Ok(BookingWithPlace {
                    booking: b.clone(),
                    place,
                })
            })
            .collect()
    }
}
