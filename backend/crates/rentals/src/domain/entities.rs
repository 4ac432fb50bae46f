//! Domain Entities
//!
//! Places (listings owned by hosts) and bookings (reservations made by
//! guests). Owner and booking-user fields are set at creation from the
//! resolved identity and are immutable afterwards.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_objects::{BookingId, PlaceId, UserId};

/// The editable attributes of a place
///
/// Used both at creation and by the whole-record replace that `update`
/// performs; the owner is deliberately not part of this set.
#[derive(Debug, Clone)]
pub struct PlaceFields {
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

/// Place entity
#[derive(Debug, Clone)]
pub struct Place {
    pub place_id: PlaceId,
    /// Owning user; immutable after creation
    pub owner: UserId,
    pub title: String,
    pub address: String,
    /// Ordered photo references
    pub photos: Vec<String>,
    pub description: String,
    /// Perk tags (wifi, parking, ...)
    pub perks: Vec<String>,
    pub extra_info: String,
    /// Check-in time specification (e.g. "14:00")
    pub check_in: String,
    /// Check-out time specification
    pub check_out: String,
    pub max_guests: i32,
    /// Nightly price in whole currency units
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Place {
    /// Create a new place owned by `owner`
    pub fn new(owner: UserId, fields: PlaceFields) -> Self {
        let mut place = Self {
            place_id: PlaceId::new(),
            owner,
            title: String::new(),
            address: String::new(),
            photos: Vec::new(),
            description: String::new(),
            perks: Vec::new(),
            extra_info: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            max_guests: 0,
            price: 0,
            created_at: Utc::now(),
        };
        place.apply(fields);
        place
    }

    /// Whole-record replace of the editable attributes
    ///
    /// Identity, owner, and creation time are untouched.
    pub fn apply(&mut self, fields: PlaceFields) {
        self.title = fields.title;
        self.address = fields.address;
        self.photos = fields.photos;
        self.description = fields.description;
        self.perks = fields.perks;
        self.extra_info = fields.extra_info;
        self.check_in = fields.check_in;
        self.check_out = fields.check_out;
        self.max_guests = fields.max_guests;
        self.price = fields.price;
    }

    /// Whether `user` owns this place
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }
}

/// Booking entity
#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    /// Reserved place
    pub place: PlaceId,
    /// Booking author; always the requester at creation time
    pub user: UserId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    /// Contact name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Total price for the stay
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new booking attributed to `user`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user: UserId,
        place: PlaceId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
        name: String,
        phone: String,
        price: i64,
    ) -> Self {
        Self {
            booking_id: BookingId::new(),
            place,
            user,
            check_in,
            check_out,
            guests,
            name,
            phone,
            price,
            created_at: Utc::now(),
        }
    }

    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A booking resolved with its referenced place (the denormalized view
/// callers always receive when listing)
#[derive(Debug, Clone)]
pub struct BookingWithPlace {
    pub booking: Booking,
    pub place: Place,
}
