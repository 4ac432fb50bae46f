//! Update Place Use Case
//!
//! Owner-only whole-record replace. The record is loaded first and the
//! stored owner compared against the requester; a mismatch is a typed
//! `NotOwner` outcome with no mutation performed - callers must handle
//! all three of updated / forbidden / not-found.

use std::sync::Arc;

use accounts::Identity;

use crate::application::create_place::validate_fields;
use crate::domain::entities::{Place, PlaceFields};
use crate::domain::repository::PlaceRepository;
use crate::domain::value_objects::PlaceId;
use crate::error::{RentalsError, RentalsResult};

/// Update place use case
pub struct UpdatePlaceUseCase<P>
where
    P: PlaceRepository,
{
    place_repo: Arc<P>,
}

impl<P> UpdatePlaceUseCase<P>
where
    P: PlaceRepository,
{
    pub fn new(place_repo: Arc<P>) -> Self {
        Self { place_repo }
    }

    pub async fn execute(
        &self,
        place_id: &PlaceId,
        requester: &Identity,
        fields: PlaceFields,
    ) -> RentalsResult<Place> {
        validate_fields(&fields)?;

        let mut place = self
            .place_repo
            .find_by_id(place_id)
            .await?
            .ok_or(RentalsError::PlaceNotFound)?;

        if !place.is_owned_by(&requester.user_id) {
            tracing::warn!(
                place_id = %place.place_id,
                requester = %requester.user_id,
                "Update rejected: requester does not own place"
            );
            return Err(RentalsError::NotOwner);
        }

        place.apply(fields);
        self.place_repo.update(&place).await?;

        tracing::info!(place_id = %place.place_id, "Place updated");

        Ok(place)
    }
}
