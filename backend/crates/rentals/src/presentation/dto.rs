//! API DTOs (Data Transfer Objects)
//!
//! Request types carry no owner/user field: attribution always comes from
//! the verified identity, so a conflicting value in the payload is simply
//! not representable (unknown JSON fields are ignored).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithPlace, Place, PlaceFields};

// ============================================================================
// Places
// ============================================================================

/// Place create request (also the field set of an update)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub title: String,
    pub address: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(default)]
    pub extra_info: String,
    pub check_in: String,
    pub check_out: String,
    pub max_guests: i32,
    pub price: i64,
}

impl PlaceRequest {
    pub fn into_fields(self) -> PlaceFields {
        PlaceFields {
            title: self.title,
            address: self.address,
            photos: self.photos,
            description: self.description,
            perks: self.perks,
            extra_info: self.extra_info,
            check_in: self.check_in,
            check_out: self.check_out,
            max_guests: self.max_guests,
            price: self.price,
        }
    }
}

/// Place update request (the target id travels in the body)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: PlaceRequest,
}

/// Place representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub address: String,
    pub photos: Vec<String>,
    pub description: String,
    pub perks: Vec<String>,
    pub extra_info: String,
    pub check_in: String,
    pub check_out: String,
    pub max_guests: i32,
    pub price: i64,
}

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: place.place_id.to_string(),
            owner: place.owner.to_string(),
            title: place.title.clone(),
            address: place.address.clone(),
            photos: place.photos.clone(),
            description: place.description.clone(),
            perks: place.perks.clone(),
            extra_info: place.extra_info.clone(),
            check_in: place.check_in.clone(),
            check_out: place.check_out.clone(),
            max_guests: place.max_guests,
            price: place.price,
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

/// Booking create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub place: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: i32,
    pub name: String,
    pub phone: String,
    pub price: i64,
}

/// Booking representation (place by reference)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub place: String,
    pub user: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: i32,
    pub name: String,
    pub phone: String,
    pub price: i64,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.booking_id.to_string(),
            place: booking.place.to_string(),
            user: booking.user.to_string(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            number_of_guests: booking.guests,
            name: booking.name.clone(),
            phone: booking.phone.clone(),
            price: booking.price,
        }
    }
}

/// Booking representation with its place joined (list view)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithPlaceResponse {
    pub id: String,
    pub place: PlaceResponse,
    pub user: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: i32,
    pub name: String,
    pub phone: String,
    pub price: i64,
}

impl From<&BookingWithPlace> for BookingWithPlaceResponse {
    fn from(entry: &BookingWithPlace) -> Self {
        Self {
            id: entry.booking.booking_id.to_string(),
            place: PlaceResponse::from(&entry.place),
            user: entry.booking.user.to_string(),
            check_in: entry.booking.check_in,
            check_out: entry.booking.check_out,
            number_of_guests: entry.booking.guests,
            name: entry.booking.name.clone(),
            phone: entry.booking.phone.clone(),
            price: entry.booking.price,
        }
    }
}
