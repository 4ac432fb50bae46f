//! Browse Places Use Case
//!
//! Read paths over the listing directory: the public catalogue, a single
//! place by id, and the authenticated caller's own listings.

use std::sync::Arc;

use accounts::Identity;

use crate::domain::entities::Place;
use crate::domain::repository::PlaceRepository;
use crate::domain::value_objects::PlaceId;
use crate::error::{RentalsError, RentalsResult};

/// Browse places use case
pub struct BrowsePlacesUseCase<P>
where
    P: PlaceRepository,
{
    place_repo: Arc<P>,
}

impl<P> BrowsePlacesUseCase<P>
where
    P: PlaceRepository,
{
    pub fn new(place_repo: Arc<P>) -> Self {
        Self { place_repo }
    }

    /// Public directory listing (unauthenticated)
    pub async fn list_all(&self) -> RentalsResult<Vec<Place>> {
        self.place_repo.list_all().await
    }

    /// Load one place by id
    pub async fn get(&self, place_id: &PlaceId) -> RentalsResult<Place> {
        self.place_repo
            .find_by_id(place_id)
            .await?
            .ok_or(RentalsError::PlaceNotFound)
    }

    /// The caller's own listings
    pub async fn list_owned(&self, owner: &Identity) -> RentalsResult<Vec<Place>> {
        self.place_repo.list_by_owner(&owner.user_id).await
    }
}
