//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use std::sync::Arc;
use uuid::Uuid;

use accounts::{Identity, IdentityResolver};

use crate::application::{
    BrowsePlacesUseCase, CreateBookingInput, CreateBookingUseCase, CreatePlaceUseCase,
    MyBookingsUseCase, UpdatePlaceUseCase,
};
use crate::domain::repository::{BookingRepository, PlaceRepository};
use crate::domain::value_objects::PlaceId;
use crate::error::{RentalsError, RentalsResult};
use crate::presentation::dto::{
    BookingRequest, BookingResponse, BookingWithPlaceResponse, PlaceRequest, PlaceResponse,
    UpdatePlaceRequest,
};

/// Shared state for rentals handlers
#[derive(Clone)]
pub struct RentalsAppState<R>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub resolver: Arc<IdentityResolver>,
}

/// Resolve the caller or fail with 401
fn require_identity(
    resolver: &IdentityResolver,
    headers: &HeaderMap,
) -> RentalsResult<Identity> {
    resolver
        .resolve(headers)
        .into_identity()
        .ok_or(RentalsError::Unauthenticated)
}

// ============================================================================
// Places
// ============================================================================

/// POST /places
pub async fn create_place<R>(
    State(state): State<RentalsAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<PlaceRequest>,
) -> RentalsResult<Json<PlaceResponse>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&state.resolver, &headers)?;

    let use_case = CreatePlaceUseCase::new(state.repo.clone());
    let place = use_case.execute(&identity, req.into_fields()).await?;

    Ok(Json(PlaceResponse::from(&place)))
}

/// GET /user-places
pub async fn user_places<R>(
    State(state): State<RentalsAppState<R>>,
    headers: HeaderMap,
) -> RentalsResult<Json<Vec<PlaceResponse>>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&state.resolver, &headers)?;

    let use_case = BrowsePlacesUseCase::new(state.repo.clone());
    let places = use_case.list_owned(&identity).await?;

    Ok(Json(places.iter().map(PlaceResponse::from).collect()))
}

/// GET /places/{id}
pub async fn get_place<R>(
    State(state): State<RentalsAppState<R>>,
    Path(id): Path<Uuid>,
) -> RentalsResult<Json<PlaceResponse>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowsePlacesUseCase::new(state.repo.clone());
    let place = use_case.get(&PlaceId::from_uuid(id)).await?;

    Ok(Json(PlaceResponse::from(&place)))
}

/// GET /places
pub async fn list_places<R>(
    State(state): State<RentalsAppState<R>>,
) -> RentalsResult<Json<Vec<PlaceResponse>>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowsePlacesUseCase::new(state.repo.clone());
    let places = use_case.list_all().await?;

    Ok(Json(places.iter().map(PlaceResponse::from).collect()))
}

/// PUT /places
pub async fn update_place<R>(
    State(state): State<RentalsAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<UpdatePlaceRequest>,
) -> RentalsResult<Json<&'static str>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&state.resolver, &headers)?;

    let use_case = UpdatePlaceUseCase::new(state.repo.clone());
    use_case
        .execute(
            &PlaceId::from_uuid(req.id),
            &identity,
            req.fields.into_fields(),
        )
        .await?;

    Ok(Json("ok"))
}

// ============================================================================
// Bookings
// ============================================================================

/// POST /bookings
pub async fn create_booking<R>(
    State(state): State<RentalsAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<BookingRequest>,
) -> RentalsResult<Json<BookingResponse>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&state.resolver, &headers)?;

    let use_case = CreateBookingUseCase::new(state.repo.clone(), state.repo.clone());

    let input = CreateBookingInput {
        place: PlaceId::from_uuid(req.place),
        check_in: req.check_in,
        check_out: req.check_out,
        guests: req.number_of_guests,
        name: req.name,
        phone: req.phone,
        price: req.price,
    };

    let booking = use_case.execute(&identity, input).await?;

    Ok(Json(BookingResponse::from(&booking)))
}

/// GET /bookings
pub async fn list_bookings<R>(
    State(state): State<RentalsAppState<R>>,
    headers: HeaderMap,
) -> RentalsResult<Json<Vec<BookingWithPlaceResponse>>>
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&state.resolver, &headers)?;

    let use_case = MyBookingsUseCase::new(state.repo.clone());
    let bookings = use_case.execute(&identity).await?;

    Ok(Json(
        bookings.iter().map(BookingWithPlaceResponse::from).collect(),
    ))
}
