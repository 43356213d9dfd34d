use chrono::{Days, NaiveDate, Utc};
use deskhq::models::{
	BookingDuration,
	BookingHour,
	NewBooking,
	NewLocation,
	NewProfile,
	NewService,
	OfficeLocation,
	PrimitiveLocation,
	PrimitiveProfile,
	PrimitiveService,
	SpaceType,
};
use deskhq::{DbConn, DbPool};

mod mock_db;

use mock_db::{DATABASE_PROVIDER, DatabaseGuard};

/// Rows every test database starts out with
#[allow(dead_code)]
pub struct Fixtures {
	pub alice:    PrimitiveProfile,
	pub bob:      PrimitiveProfile,
	pub brooklyn: PrimitiveLocation,
	pub dockyard: PrimitiveLocation,
	pub seat1:    PrimitiveService,
	pub seat2:    PrimitiveService,
}

#[allow(dead_code)]
pub struct TestEnv {
	pub pool:     DbPool,
	pub db_guard: DatabaseGuard,
	pub fixtures: Fixtures,
}

impl TestEnv {
	/// Get a test environment backed by a fresh, seeded database
	///
	/// # Panics
	/// Panics if `DATABASE_URL` is not set, or if creating or seeding the
	/// database fails
	pub async fn new() -> Self {
		let db_guard = (*DATABASE_PROVIDER).acquire().await;
		let pool = db_guard.create_pool().await;

		let fixtures = {
			let conn = pool.get().await.unwrap();

			seed(&conn).await
		};

		TestEnv { pool, db_guard, fixtures }
	}

	/// Get a connection to the test database
	///
	/// # Panics
	/// Panics if the pool is exhausted
	pub async fn conn(&self) -> DbConn {
		self.pool.get().await.unwrap()
	}
}

async fn seed(conn: &DbConn) -> Fixtures {
	let alice = NewProfile {
		username: "alice".to_string(),
		email:    Some("alice@deskhq.test".to_string()),
	}
	.insert(conn)
	.await
	.unwrap();

	let bob = NewProfile { username: "bob".to_string(), email: None }
		.insert(conn)
		.await
		.unwrap();

	let brooklyn = NewLocation {
		location_id:    None,
		location_name:  OfficeLocation::BrooklynHouse,
		slug:           "brooklyn-house".to_string(),
		featured_image: "placeholder".to_string(),
	}
	.insert(conn)
	.await
	.unwrap();

	let dockyard = NewLocation {
		location_id:    Some(2),
		location_name:  OfficeLocation::DockyardPlace,
		slug:           "dockyard-place".to_string(),
		featured_image: "placeholder".to_string(),
	}
	.insert(conn)
	.await
	.unwrap();

	let seat1 = NewService {
		space_type:     SpaceType::Seat1,
		content:        "Window seat".to_string(),
		featured_image: "placeholder".to_string(),
	}
	.insert(conn)
	.await
	.unwrap();

	let seat2 = NewService {
		space_type:     SpaceType::Seat2,
		content:        String::new(),
		featured_image: "placeholder".to_string(),
	}
	.insert(conn)
	.await
	.unwrap();

	Fixtures { alice, bob, brooklyn, dockyard, seat1, seat2 }
}

/// The first day a booking may be made for
#[allow(dead_code)]
pub fn tomorrow() -> NaiveDate {
	let today = Utc::now().date_naive();

	today.checked_add_days(Days::new(1)).unwrap()
}

/// A booking for the 09:00 to 10:00 slot tomorrow
#[allow(dead_code)]
pub fn morning_booking(
	client: &PrimitiveProfile,
	location: &PrimitiveLocation,
	service: &PrimitiveService,
) -> NewBooking {
	NewBooking {
		client_id:        client.id,
		location_id:      location.location_id,
		service_id:       service.id,
		booking_date:     tomorrow(),
		booking_duration: BookingDuration::OneHour,
		booking_start:    BookingHour::T0900,
		booking_end:      BookingHour::T1000,
		status:           None,
		approved:         None,
	}
}
