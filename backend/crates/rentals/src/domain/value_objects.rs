//! Value Objects
//!
//! Typed identifiers for rentals entities. `UserId` is shared with the
//! accounts bounded context, since ownership and booking attribution refer
//! to the same identity.

use kernel::id::Id;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceMarker;
pub type PlaceId = Id<PlaceMarker>;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingMarker;
pub type BookingId = Id<BookingMarker>;

pub use accounts::domain::value_object::user_id::UserId;
