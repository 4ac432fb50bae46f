//! Create Place Use Case
//!
//! Persists a new listing owned by the authenticated caller. The owner is
//! taken exclusively from the resolved identity; nothing in the request
//! payload can designate a different one.

use std::sync::Arc;

use accounts::Identity;

use crate::domain::entities::{Place, PlaceFields};
use crate::domain::repository::PlaceRepository;
use crate::error::{RentalsError, RentalsResult};

/// Create place use case
pub struct CreatePlaceUseCase<P>
where
    P: PlaceRepository,
{
    place_repo: Arc<P>,
}

impl<P> CreatePlaceUseCase<P>
where
    P: PlaceRepository,
{
    pub fn new(place_repo: Arc<P>) -> Self {
        Self { place_repo }
    }

    pub async fn execute(&self, owner: &Identity, fields: PlaceFields) -> RentalsResult<Place> {
        validate_fields(&fields)?;

        let place = Place::new(owner.user_id, fields);

        self.place_repo.create(&place).await?;

        tracing::info!(
            place_id = %place.place_id,
            owner = %place.owner,
            "Place created"
        );

        Ok(place)
    }
}

/// Shared field validation for place creation and update
pub(crate) fn validate_fields(fields: &PlaceFields) -> RentalsResult<()> {
    if fields.title.trim().is_empty() {
        return Err(RentalsError::Validation("title cannot be empty".to_string()));
    }
    if fields.address.trim().is_empty() {
        return Err(RentalsError::Validation(
            "address cannot be empty".to_string(),
        ));
    }
    if fields.max_guests < 1 {
        return Err(RentalsError::Validation(
            "maxGuests must be at least 1".to_string(),
        ));
    }
    if fields.price < 0 {
        return Err(RentalsError::Validation(
            "price cannot be negative".to_string(),
        ));
    }
    Ok(())
}
