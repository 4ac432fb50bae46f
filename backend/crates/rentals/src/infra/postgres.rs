//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithPlace, Place};
use crate::domain::repository::{BookingRepository, PlaceRepository};
use crate::domain::value_objects::{BookingId, PlaceId, UserId};
use crate::error::RentalsResult;

/// PostgreSQL-backed rentals repository
#[derive(Clone)]
pub struct PgRentalsRepository {
    pool: PgPool,
}

impl PgRentalsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Place Repository Implementation
// ============================================================================

impl PlaceRepository for PgRentalsRepository {
    async fn create(&self, place: &Place) -> RentalsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO places (
                place_id,
                owner_id,
                title,
                address,
                photos,
                description,
                perks,
                extra_info,
                check_in,
                check_out,
                max_guests,
                price,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(place.place_id.as_uuid())
        .bind(place.owner.as_uuid())
        .bind(&place.title)
        .bind(&place.address)
        .bind(&place.photos)
        .bind(&place.description)
        .bind(&place.perks)
        .bind(&place.extra_info)
        .bind(&place.check_in)
        .bind(&place.check_out)
        .bind(place.max_guests)
        .bind(place.price)
        .bind(place.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, place_id: &PlaceId) -> RentalsResult<Option<Place>> {
        let row = sqlx::query_as::<_, PlaceRow>(
            r#"
            SELECT
                place_id,
                owner_id,
                title,
                address,
                photos,
                description,
                perks,
                extra_info,
                check_in,
                check_out,
                max_guests,
                price,
                created_at
            FROM places
            WHERE place_id = $1
            "#,
        )
        .bind(place_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlaceRow::into_place))
    }

    async fn list_all(&self) -> RentalsResult<Vec<Place>> {
        let rows = sqlx::query_as::<_, PlaceRow>(
            r#"
            SELECT
                place_id,
                owner_id,
                title,
                address,
                photos,
                description,
                perks,
                extra_info,
                check_in,
                check_out,
                max_guests,
                price,
                created_at
            FROM places
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlaceRow::into_place).collect())
    }

    async fn list_by_owner(&self, owner: &UserId) -> RentalsResult<Vec<Place>> {
        let rows = sqlx::query_as::<_, PlaceRow>(
            r#"
            SELECT
                place_id,
                owner_id,
                title,
                address,
                photos,
                description,
                perks,
                extra_info,
                check_in,
                check_out,
                max_guests,
                price,
                created_at
            FROM places
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlaceRow::into_place).collect())
    }

    async fn update(&self, place: &Place) -> RentalsResult<()> {
        // Single statement: the whole editable field set replaces atomically
        sqlx::query(
            r#"
            UPDATE places SET
                title = $2,
                address = $3,
                photos = $4,
                description = $5,
                perks = $6,
                extra_info = $7,
                check_in = $8,
                check_out = $9,
                max_guests = $10,
                price = $11
            WHERE place_id = $1
            "#,
        )
        .bind(place.place_id.as_uuid())
        .bind(&place.title)
        .bind(&place.address)
        .bind(&place.photos)
        .bind(&place.description)
        .bind(&place.perks)
        .bind(&place.extra_info)
        .bind(&place.check_in)
        .bind(&place.check_out)
        .bind(place.max_guests)
        .bind(place.price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Booking Repository Implementation
// ============================================================================

impl BookingRepository for PgRentalsRepository {
    async fn create(&self, booking: &Booking) -> RentalsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id,
                place_id,
                user_id,
                check_in,
                check_out,
                guests,
                contact_name,
                contact_phone,
                price,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(booking.booking_id.as_uuid())
        .bind(booking.place.as_uuid())
        .bind(booking.user.as_uuid())
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(&booking.name)
        .bind(&booking.phone)
        .bind(booking.price)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_user(&self, user: &UserId) -> RentalsResult<Vec<BookingWithPlace>> {
        let rows = sqlx::query_as::<_, BookingPlaceRow>(
            r#"
            SELECT
                b.booking_id,
                b.place_id,
                b.user_id,
                b.check_in,
                b.check_out,
                b.guests,
                b.contact_name,
                b.contact_phone,
                b.price,
                b.created_at,
                p.owner_id     AS place_owner_id,
                p.title        AS place_title,
                p.address      AS place_address,
                p.photos       AS place_photos,
                p.description  AS place_description,
                p.perks        AS place_perks,
                p.extra_info   AS place_extra_info,
                p.check_in     AS place_check_in,
                p.check_out    AS place_check_out,
                p.max_guests   AS place_max_guests,
                p.price        AS place_price,
                p.created_at   AS place_created_at
            FROM bookings b
            JOIN places p ON p.place_id = b.place_id
            WHERE b.user_id = $1
            ORDER BY b.check_in
            "#,
        )
        .bind(user.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookingPlaceRow::into_entry).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PlaceRow {
    place_id: Uuid,
    owner_id: Uuid,
    title: String,
    address: String,
    photos: Vec<String>,
    description: String,
    perks: Vec<String>,
    extra_info: String,
    check_in: String,
    check_out: String,
    max_guests: i32,
    price: i64,
    created_at: DateTime<Utc>,
}

impl PlaceRow {
    fn into_place(self) -> Place {
        Place {
            place_id: PlaceId::from_uuid(self.place_id),
            owner: UserId::from_uuid(self.owner_id),
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
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookingPlaceRow {
    booking_id: Uuid,
    place_id: Uuid,
    user_id: Uuid,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    contact_name: String,
    contact_phone: String,
    price: i64,
    created_at: DateTime<Utc>,
    place_owner_id: Uuid,
    place_title: String,
    place_address: String,
    place_photos: Vec<String>,
    place_description: String,
    place_perks: Vec<String>,
    place_extra_info: String,
    place_check_in: String,
    place_check_out: String,
    place_max_guests: i32,
    place_price: i64,
    place_created_at: DateTime<Utc>,
}

impl BookingPlaceRow {
    fn into_entry(self) -> BookingWithPlace {
        BookingWithPlace {
            booking: Booking {
                booking_id: BookingId::from_uuid(self.booking_id),
                place: PlaceId::from_uuid(self.place_id),
                user: UserId::from_uuid(self.user_id),
                check_in: self.check_in,
                check_out: self.check_out,
                guests: self.guests,
                name: self.contact_name,
                phone: self.contact_phone,
                price: self.price,
                created_at: self.created_at,
            },
            place: Place {
                place_id: PlaceId::from_uuid(self.place_id),
                owner: UserId::from_uuid(self.place_owner_id),
                title: self.place_title,
                address: self.place_address,
                photos: self.place_photos,
                description: self.place_description,
                perks: self.place_perks,
                extra_info: self.place_extra_info,
                check_in: self.place_check_in,
                check_out: self.place_check_out,
                max_guests: self.place_max_guests,
                price: self.place_price,
                created_at: self.place_created_at,
            },
        }
    }
}
