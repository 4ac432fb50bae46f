//! Rentals Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use accounts::IdentityResolver;

use crate::domain::repository::{BookingRepository, PlaceRepository};
use crate::infra::postgres::PgRentalsRepository;
use crate::presentation::handlers::{self, RentalsAppState};

/// Create the rentals router with PostgreSQL repository
pub fn rentals_router(repo: PgRentalsRepository, resolver: Arc<IdentityResolver>) -> Router {
    rentals_router_generic(repo, resolver)
}

/// Create a generic rentals router for any repository implementation
pub fn rentals_router_generic<R>(repo: R, resolver: Arc<IdentityResolver>) -> Router
where
    R: PlaceRepository + BookingRepository + Clone + Send + Sync + 'static,
{
    let state = RentalsAppState {
        repo: Arc::new(repo),
        resolver,
    };

    Router::new()
        .route(
            "/places",
            post(handlers::create_place::<R>)
                .get(handlers::list_places::<R>)
                .put(handlers::update_place::<R>),
        )
        .route("/places/{id}", get(handlers::get_place::<R>))
        .route("/user-places", get(handlers::user_places::<R>))
        .route(
            "/bookings",
            post(handlers::create_booking::<R>).get(handlers::list_bookings::<R>),
        )
        .with_state(state)
}
