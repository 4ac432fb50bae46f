//! Scenario tests for the rentals crate
//!
//! Use-case level tests cover the ownership and attribution invariants
//! directly; HTTP tests drive the merged accounts + rentals routers the way
//! a client would, cookie and all.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use accounts::Identity;
    use accounts::domain::value_object::email::Email;
    use chrono::NaiveDate;

    use crate::application::{
        BrowsePlacesUseCase, CreateBookingInput, CreateBookingUseCase, CreatePlaceUseCase,
        MyBookingsUseCase, UpdatePlaceUseCase,
    };
    use crate::domain::entities::PlaceFields;
    use crate::domain::value_objects::{PlaceId, UserId};
    use crate::error::RentalsError;
    use crate::infra::memory::MemRentalsRepository;

    fn identity(email: &str) -> Identity {
        Identity {
            user_id: UserId::new(),
            email: Email::from_db(email),
        }
    }

    fn fields(title: &str, price: i64) -> PlaceFields {
        PlaceFields {
            title: title.to_string(),
            address: "12 Quay Street".to_string(),
            photos: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            description: "Bright loft".to_string(),
            perks: vec!["wifi".to_string(), "parking".to_string()],
            extra_info: "No parties".to_string(),
            check_in: "15:00".to_string(),
            check_out: "10:00".to_string(),
            max_guests: 3,
            price,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_owner_can_update_own_place() {
        let repo = Arc::new(MemRentalsRepository::new());
        let owner = identity("host@example.com");

        let place = CreatePlaceUseCase::new(repo.clone())
            .execute(&owner, fields("Loft", 100))
            .await
            .unwrap();

        let updated = UpdatePlaceUseCase::new(repo.clone())
            .execute(&place.place_id, &owner, fields("Renamed loft", 130))
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed loft");
        assert_eq!(updated.price, 130);
        assert_eq!(updated.owner, owner.user_id);

        let stored = BrowsePlacesUseCase::new(repo)
            .get(&place.place_id)
            .await
            .unwrap();
        assert_eq!(stored.title, "Renamed loft");
    }

    #[tokio::test]
    async fn test_non_owner_update_is_forbidden_and_leaves_place_unchanged() {
        let repo = Arc::new(MemRentalsRepository::new());
        let owner = identity("host@example.com");
        let intruder = identity("intruder@example.com");

        let place = CreatePlaceUseCase::new(repo.clone())
            .execute(&owner, fields("Loft", 100))
            .await
            .unwrap();

        let result = UpdatePlaceUseCase::new(repo.clone())
            .execute(&place.place_id, &intruder, fields("Hijacked", 1))
            .await;

        assert!(matches!(result, Err(RentalsError::NotOwner)));

        // The record is untouched
        let stored = BrowsePlacesUseCase::new(repo)
            .get(&place.place_id)
            .await
            .unwrap();
        assert_eq!(stored.title, "Loft");
        assert_eq!(stored.price, 100);
        assert_eq!(stored.owner, owner.user_id);
    }

    #[tokio::test]
    async fn test_update_missing_place_is_not_found() {
        let repo = Arc::new(MemRentalsRepository::new());
        let caller = identity("host@example.com");

        let result = UpdatePlaceUseCase::new(repo)
            .execute(&PlaceId::new(), &caller, fields("Ghost", 10))
            .await;

        assert!(matches!(result, Err(RentalsError::PlaceNotFound)));
    }

    #[tokio::test]
    async fn test_list_by_owner_is_exact() {
        let repo = Arc::new(MemRentalsRepository::new());
        let alice = identity("alice@example.com");
        let bob = identity("bob@example.com");

        let create = CreatePlaceUseCase::new(repo.clone());
        create.execute(&alice, fields("Alice 1", 50)).await.unwrap();
        create.execute(&alice, fields("Alice 2", 60)).await.unwrap();
        create.execute(&bob, fields("Bob 1", 70)).await.unwrap();

        let browse = BrowsePlacesUseCase::new(repo);
        let alices = browse.list_owned(&alice).await.unwrap();
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|p| p.owner == alice.user_id));

        let everyone = browse.list_all().await.unwrap();
        assert_eq!(everyone.len(), 3);
    }

    #[tokio::test]
    async fn test_get_by_id_is_idempotent() {
        let repo = Arc::new(MemRentalsRepository::new());
        let owner = identity("host@example.com");

        let place = CreatePlaceUseCase::new(repo.clone())
            .execute(&owner, fields("Loft", 100))
            .await
            .unwrap();

        let browse = BrowsePlacesUseCase::new(repo);
        let first = browse.get(&place.place_id).await.unwrap();
        let second = browse.get(&place.place_id).await.unwrap();

        assert_eq!(first.title, second.title);
        assert_eq!(first.owner, second.owner);
        assert_eq!(first.price, second.price);
        assert_eq!(first.created_at, second.created_at);
    }

    #[tokio::test]
    async fn test_booking_is_attributed_to_requester() {
        let repo = Arc::new(MemRentalsRepository::new());
        let host = identity("host@example.com");
        let guest = identity("guest@example.com");

        let place = CreatePlaceUseCase::new(repo.clone())
            .execute(&host, fields("Loft", 100))
            .await
            .unwrap();

        let booking = CreateBookingUseCase::new(repo.clone(), repo.clone())
            .execute(
                &guest,
                CreateBookingInput {
                    place: place.place_id,
                    check_in: date(2025, 7, 1),
                    check_out: date(2025, 7, 4),
                    guests: 2,
                    name: "Guest Contact".to_string(),
                    phone: "+44 7000 000000".to_string(),
                    price: 300,
                },
            )
            .await
            .unwrap();

        assert_eq!(booking.user, guest.user_id);

        let mine = MyBookingsUseCase::new(repo.clone())
            .execute(&guest)
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].booking.user, guest.user_id);
        assert_eq!(mine[0].place.title, "Loft");

        // Bookings never leak across users
        let hosts_view = MyBookingsUseCase::new(repo).execute(&host).await.unwrap();
        assert!(hosts_view.is_empty());
    }

    #[tokio::test]
    async fn test_booking_price_is_recomputed_server_side() {
        let repo = Arc::new(MemRentalsRepository::new());
        let host = identity("host@example.com");
        let guest = identity("guest@example.com");

        let place = CreatePlaceUseCase::new(repo.clone())
            .execute(&host, fields("Loft", 100))
            .await
            .unwrap();

        // 3 nights at 100/night: a client claiming 1 does not get a deal
        let result = CreateBookingUseCase::new(repo.clone(), repo.clone())
            .execute(
                &guest,
                CreateBookingInput {
                    place: place.place_id,
                    check_in: date(2025, 7, 1),
                    check_out: date(2025, 7, 4),
                    guests: 2,
                    name: "Guest Contact".to_string(),
                    phone: "+44 7000 000000".to_string(),
                    price: 1,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(RentalsError::PriceMismatch { expected: 300 })
        ));
    }

    #[tokio::test]
    async fn test_booking_rejects_inverted_dates() {
        let repo = Arc::new(MemRentalsRepository::new());
        let host = identity("host@example.com");
        let guest = identity("guest@example.com");

        let place = CreatePlaceUseCase::new(repo.clone())
            .execute(&host, fields("Loft", 100))
            .await
            .unwrap();

        let result = CreateBookingUseCase::new(repo.clone(), repo)
            .execute(
                &guest,
                CreateBookingInput {
                    place: place.place_id,
                    check_in: date(2025, 7, 4),
                    check_out: date(2025, 7, 1),
                    guests: 2,
                    name: "Guest Contact".to_string(),
                    phone: "+44 7000 000000".to_string(),
                    price: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(RentalsError::InvalidStay(_))));
    }

    #[tokio::test]
    async fn test_booking_unknown_place_is_not_found() {
        let repo = Arc::new(MemRentalsRepository::new());
        let guest = identity("guest@example.com");

        let result = CreateBookingUseCase::new(repo.clone(), repo)
            .execute(
                &guest,
                CreateBookingInput {
                    place: PlaceId::new(),
                    check_in: date(2025, 7, 1),
                    check_out: date(2025, 7, 2),
                    guests: 1,
                    name: "Guest Contact".to_string(),
                    phone: "+44 7000 000000".to_string(),
                    price: 100,
                },
            )
            .await;

        assert!(matches!(result, Err(RentalsError::PlaceNotFound)));
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use accounts::application::config::AccountsConfig;
    use accounts::infra::memory::MemAccountsRepository;
    use accounts::presentation::identity::IdentityResolver;
    use accounts::presentation::router::accounts_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::MemRentalsRepository;
    use crate::presentation::router::rentals_router_generic;

    /// The full wire surface: accounts and rentals merged, one shared
    /// identity resolver, in-memory stores.
    fn test_app() -> Router {
        let config = AccountsConfig::development();
        let resolver = Arc::new(IdentityResolver::new(&config));

        Router::new()
            .merge(accounts_router_generic(
                MemAccountsRepository::new(),
                config,
            ))
            .merge(rentals_router_generic(
                MemRentalsRepository::new(),
                resolver,
            ))
    }

    fn request(method: &str, path: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Register + login a user, returning (cookie, user id)
    async fn login_as(app: &Router, name: &str, email: &str) -> (String, String) {
        let register = app
            .clone()
            .oneshot(request(
                "POST",
                "/register",
                None,
                Some(json!({ "name": name, "email": email, "password": "CorrectHorse9!" })),
            ))
            .await
            .unwrap();
        assert_eq!(register.status(), StatusCode::OK);
        let user = body_json(register).await;

        let login = app
            .clone()
            .oneshot(request(
                "POST",
                "/login",
                None,
                Some(json!({ "email": email, "password": "CorrectHorse9!" })),
            ))
            .await
            .unwrap();
        assert_eq!(login.status(), StatusCode::OK);

        let cookie = login
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        (cookie, user["id"].as_str().unwrap().to_string())
    }

    fn place_body(title: &str, price: i64) -> Value {
        json!({
            "title": title,
            "address": "12 Quay Street",
            "photos": ["a.jpg"],
            "description": "Bright loft",
            "perks": ["wifi"],
            "extraInfo": "",
            "checkIn": "15:00",
            "checkOut": "10:00",
            "maxGuests": 3,
            "price": price,
        })
    }

    #[tokio::test]
    async fn test_create_place_requires_authentication() {
        let app = test_app();

        let response = app
            .oneshot(request("POST", "/places", None, Some(place_body("Loft", 100))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_place_owner_comes_from_identity() {
        let app = test_app();
        let (cookie, user_id) = login_as(&app, "Alice", "alice@example.com").await;

        // A hostile payload naming someone else as owner is ignored
        let mut body = place_body("Loft", 100);
        body["owner"] = json!("11111111-1111-1111-1111-111111111111");

        let response = app
            .oneshot(request("POST", "/places", Some(&cookie), Some(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let place = body_json(response).await;
        assert_eq!(place["owner"], Value::String(user_id));
        assert_eq!(place["title"], "Loft");
    }

    #[tokio::test]
    async fn test_foreign_update_is_forbidden_end_to_end() {
        let app = test_app();

        // Register A, create place P owned by A
        let (cookie_a, _) = login_as(&app, "Alice", "alice@example.com").await;
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/places",
                Some(&cookie_a),
                Some(place_body("Loft", 100)),
            ))
            .await
            .unwrap();
        let place = body_json(created).await;
        let place_id = place["id"].as_str().unwrap().to_string();

        // Login as B, attempt the update
        let (cookie_b, _) = login_as(&app, "Bob", "bob@example.com").await;
        let mut update = place_body("Hijacked", 1);
        update["id"] = json!(place_id);

        let response = app
            .clone()
            .oneshot(request("PUT", "/places", Some(&cookie_b), Some(update)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        // P is unchanged
        let fetched = app
            .oneshot(request("GET", &format!("/places/{}", place_id), None, None))
            .await
            .unwrap();
        let fetched = body_json(fetched).await;
        assert_eq!(fetched["title"], "Loft");
        assert_eq!(fetched["price"], 100);
    }

    #[tokio::test]
    async fn test_owner_update_succeeds_end_to_end() {
        let app = test_app();
        let (cookie, _) = login_as(&app, "Alice", "alice@example.com").await;

        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/places",
                Some(&cookie),
                Some(place_body("Loft", 100)),
            ))
            .await
            .unwrap();
        let place = body_json(created).await;
        let place_id = place["id"].as_str().unwrap().to_string();

        let mut update = place_body("Sea-view loft", 140);
        update["id"] = json!(place_id);

        let response = app
            .clone()
            .oneshot(request("PUT", "/places", Some(&cookie), Some(update)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, Value::String("ok".to_string()));

        let fetched = app
            .oneshot(request("GET", &format!("/places/{}", place_id), None, None))
            .await
            .unwrap();
        let fetched = body_json(fetched).await;
        assert_eq!(fetched["title"], "Sea-view loft");
        assert_eq!(fetched["price"], 140);
    }

    #[tokio::test]
    async fn test_update_unknown_place_is_404() {
        let app = test_app();
        let (cookie, _) = login_as(&app, "Alice", "alice@example.com").await;

        let mut update = place_body("Ghost", 10);
        update["id"] = json!("4aad26a0-7de5-4b5d-b5a1-3a9bfa0a7b6a");

        let response = app
            .oneshot(request("PUT", "/places", Some(&cookie), Some(update)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_place_directory_is_public_but_user_places_is_not() {
        let app = test_app();
        let (cookie, _) = login_as(&app, "Alice", "alice@example.com").await;

        app.clone()
            .oneshot(request(
                "POST",
                "/places",
                Some(&cookie),
                Some(place_body("Loft", 100)),
            ))
            .await
            .unwrap();

        // Anyone may browse the directory
        let public = app
            .clone()
            .oneshot(request("GET", "/places", None, None))
            .await
            .unwrap();
        assert_eq!(public.status(), StatusCode::OK);
        assert_eq!(body_json(public).await.as_array().unwrap().len(), 1);

        // Own-listings view requires identity
        let anonymous = app
            .clone()
            .oneshot(request("GET", "/user-places", None, None))
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let own = app
            .oneshot(request("GET", "/user-places", Some(&cookie), None))
            .await
            .unwrap();
        assert_eq!(own.status(), StatusCode::OK);
        assert_eq!(body_json(own).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_place_is_404() {
        let app = test_app();

        let response = app
            .oneshot(request(
                "GET",
                "/places/4aad26a0-7de5-4b5d-b5a1-3a9bfa0a7b6a",
                None,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_booking_ignores_client_supplied_user() {
        let app = test_app();

        let (cookie_host, _) = login_as(&app, "Host", "host@example.com").await;
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/places",
                Some(&cookie_host),
                Some(place_body("Loft", 100)),
            ))
            .await
            .unwrap();
        let place = body_json(created).await;
        let place_id = place["id"].as_str().unwrap().to_string();

        let (cookie_guest, guest_id) = login_as(&app, "Guest", "guest@example.com").await;

        // Payload tries to attribute the booking to someone else
        let booking_body = json!({
            "place": place_id,
            "checkIn": "2025-07-01",
            "checkOut": "2025-07-04",
            "numberOfGuests": 2,
            "name": "Guest Contact",
            "phone": "+44 7000 000000",
            "price": 300,
            "user": "11111111-1111-1111-1111-111111111111",
        });

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/bookings",
                Some(&cookie_guest),
                Some(booking_body),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let booking = body_json(response).await;
        assert_eq!(booking["user"], Value::String(guest_id.clone()));

        // And the list view is scoped to the requester, place joined
        let listed = app
            .oneshot(request("GET", "/bookings", Some(&cookie_guest), None))
            .await
            .unwrap();
        assert_eq!(listed.status(), StatusCode::OK);
        let listed = body_json(listed).await;
        let entries = listed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["user"], Value::String(guest_id));
        assert_eq!(entries[0]["place"]["title"], "Loft");
    }

    #[tokio::test]
    async fn test_booking_price_mismatch_is_422() {
        let app = test_app();

        let (cookie, _) = login_as(&app, "Host", "host@example.com").await;
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/places",
                Some(&cookie),
                Some(place_body("Loft", 100)),
            ))
            .await
            .unwrap();
        let place = body_json(created).await;

        let booking_body = json!({
            "place": place["id"],
            "checkIn": "2025-07-01",
            "checkOut": "2025-07-04",
            "numberOfGuests": 2,
            "name": "Guest Contact",
            "phone": "+44 7000 000000",
            "price": 5,
        });

        let response = app
            .oneshot(request("POST", "/bookings", Some(&cookie), Some(booking_body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_bookings_require_authentication() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(request("GET", "/bookings", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(request(
                "POST",
                "/bookings",
                None,
                Some(json!({
                    "place": "4aad26a0-7de5-4b5d-b5a1-3a9bfa0a7b6a",
                    "checkIn": "2025-07-01",
                    "checkOut": "2025-07-02",
                    "numberOfGuests": 1,
                    "name": "x",
                    "phone": "y",
                    "price": 0,
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
