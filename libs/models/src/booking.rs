use std::fmt;

use chrono::{Days, NaiveDate, Utc};
use common::{DbConn, Error};
use db::{
	BookingDuration,
	BookingHour,
	BookingStatus,
	booking,
	location,
	profile,
	service,
};
use diesel::pg::Pg;
use diesel::prelude::*;
use primitives::{
	PrimitiveBooking,
	PrimitiveLocation,
	PrimitiveProfile,
	PrimitiveService,
	Slot,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use validator_derive::Validate;

/// A booking together with the client, location and service it references
#[derive(Clone, Debug, Deserialize, Queryable, Selectable, Serialize)]
#[diesel(table_name = booking)]
#[diesel(check_for_backend(Pg))]
pub struct Booking {
	#[diesel(embed)]
	pub primitive: PrimitiveBooking,
	#[diesel(embed)]
	pub client:    PrimitiveProfile,
	#[diesel(embed)]
	pub location:  Option<PrimitiveLocation>,
	#[diesel(embed)]
	pub service:   Option<PrimitiveService>,
}

impl fmt::Display for Booking {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let service = self
			.service
			.as_ref()
			.map_or_else(|| "None".to_string(), ToString::to_string);

		write!(
			f,
			"{} booked {} | {} | {} | {}",
			self.client,
			service,
			self.primitive.booking_date,
			self.primitive.booking_start,
			self.primitive.booking_end,
		)
	}
}

impl Booking {
	/// Build a query joining a booking with everything it references
	#[diesel::dsl::auto_type(no_type_alias)]
	fn joined_query() -> _ {
		booking::table
			.inner_join(profile::table)
			.left_join(location::table)
			.left_join(service::table)
	}

	/// Get a [`Booking`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(b_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let query = Self::joined_query();

		let booking = conn
			.interact(move |conn| {
				query
					.filter(booking::id.eq(b_id))
					.select(Self::as_select())
					.get_result(conn)
			})
			.await??;

		Ok(booking)
	}

	/// Get all bookings, newest first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let bookings = conn
			.interact(move |conn| {
				query
					.order((booking::created_on.desc(), booking::id.desc()))
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(bookings)
	}

	/// Get all bookings made by a client, newest first
	#[instrument(skip(conn))]
	pub async fn for_client(
		p_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let bookings = conn
			.interact(move |conn| {
				query
					.filter(booking::client_id.eq(p_id))
					.order((booking::created_on.desc(), booking::id.desc()))
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(bookings)
	}

	/// Get all bookings at a location, newest first
	#[instrument(skip(conn))]
	pub async fn for_location(
		l_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let bookings = conn
			.interact(move |conn| {
				query
					.filter(booking::location_id.eq(l_id))
					.order((booking::created_on.desc(), booking::id.desc()))
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(bookings)
	}
}

/// Message of the validation error raised for dates that are not in the
/// future
pub const PAST_DATE_MESSAGE: &str =
	"Date cannot be in the past or the same day.";

/// Check that a booking date lies strictly after `today`
///
/// # Errors
/// Returns a validation error for `today` or any earlier date
pub fn validate_booking_date_on(
	date: NaiveDate,
	today: NaiveDate,
) -> Result<(), ValidationError> {
	if date <= today {
		return Err(ValidationError::new("past-date")
			.with_message(PAST_DATE_MESSAGE.into()));
	}

	Ok(())
}

/// Check that a booking date lies strictly after the current (UTC) date
///
/// # Errors
/// Returns a validation error for today or any earlier date
pub fn validate_booking_date(date: &NaiveDate) -> Result<(), ValidationError> {
	validate_booking_date_on(*date, Utc::now().date_naive())
}

/// The date a booking form starts out with, tomorrow
#[must_use]
pub fn default_booking_date() -> NaiveDate {
	let today = Utc::now().date_naive();

	today.checked_add_days(Days::new(1)).unwrap_or(today)
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize, Validate)]
#[diesel(table_name = booking)]
#[diesel(check_for_backend(Pg))]
pub struct NewBooking {
	pub client_id:        i32,
	pub location_id:      i32,
	pub service_id:       i32,
	#[serde(default = "default_booking_date")]
	#[validate(custom(function = "validate_booking_date"))]
	pub booking_date:     NaiveDate,
	pub booking_duration: BookingDuration,
	#[serde(default)]
	pub booking_start:    BookingHour,
	#[serde(default)]
	pub booking_end:      BookingHour,
	/// Left empty the booking is stored as [`BookingStatus::Cancelled`]
	#[serde(default)]
	pub status:           Option<BookingStatus>,
	#[serde(default)]
	pub approved:         Option<bool>,
}

impl NewBooking {
	/// The [`Slot`] this booking would occupy
	#[must_use]
	pub fn slot(&self) -> Slot {
		Slot {
			location_id:   self.location_id,
			service_id:    self.service_id,
			booking_date:  self.booking_date,
			booking_start: self.booking_start,
			booking_end:   self.booking_end,
		}
	}

	/// Run field validation and check that the slot is still free
	///
	/// Bookings that were cancelled still occupy their slot.
	///
	/// # Errors
	/// Returns [`Error::ValidationError`] for invalid fields (including a
	/// date that is not in the future) and [`Error::Duplicate`] if the slot
	/// is taken
	#[instrument(skip(conn))]
	pub async fn validate_all(&self, conn: &DbConn) -> Result<(), Error> {
		self.validate()?;

		let taken = PrimitiveBooking::count_for_slot(self.slot(), conn).await?;

		if taken > 0 {
			return Err(Error::Duplicate("slot is already in use".to_string()));
		}

		Ok(())
	}

	/// Insert this [`NewBooking`]
	///
	/// This does not validate the booking date, callers are expected to run
	/// [`Validate::validate`] or [`NewBooking::validate_all`] first. A taken
	/// slot is still rejected by the database with [`Error::Duplicate`].
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<Booking, Error> {
		let booking = conn
			.interact(|conn| {
				use self::booking::dsl::*;

				diesel::insert_into(booking)
					.values(self)
					.returning(PrimitiveBooking::as_returning())
					.get_result(conn)
			})
			.await??;

		let booking = Booking::get_by_id(booking.id, conn).await?;

		info!("created booking {booking:?}");

		Ok(booking)
	}
}

/// Administrative changes to a booking
///
/// Any combination of status and approval is accepted.
#[derive(AsChangeset, Clone, Debug, Default, Deserialize, Serialize)]
#[diesel(table_name = booking)]
#[diesel(check_for_backend(Pg))]
pub struct BookingUpdate {
	pub status:   Option<BookingStatus>,
	pub approved: Option<bool>,
}

impl BookingUpdate {
	/// An update that cancels a booking, the slot stays occupied
	#[must_use]
	pub fn cancel() -> Self {
		Self { status: Some(BookingStatus::Cancelled), approved: None }
	}

	/// An update that approves a booking and marks it valid
	#[must_use]
	pub fn approve() -> Self {
		Self { status: Some(BookingStatus::Valid), approved: Some(true) }
	}

	/// Apply this update to the [`Booking`] with the given id
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		b_id: i32,
		conn: &DbConn,
	) -> Result<Booking, Error> {
		conn.interact(move |conn| {
			use self::booking::dsl::*;

			diesel::update(booking.find(b_id))
				.set((self, updated_on.eq(diesel::dsl::now)))
				.execute(conn)
		})
		.await??;

		let booking = Booking::get_by_id(b_id, conn).await?;

		info!("updated booking {booking:?}");

		Ok(booking)
	}
}

#[cfg(test)]
mod tests {
	use chrono::{NaiveDateTime, NaiveTime, TimeZone};
	use db::{OfficeLocation, SpaceType};

	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	fn new_booking(booking_date: NaiveDate) -> NewBooking {
		NewBooking {
			client_id: 1,
			location_id: 1,
			service_id: 1,
			booking_date,
			booking_duration: BookingDuration::OneHour,
			booking_start: BookingHour::T0900,
			booking_end: BookingHour::T1000,
			status: None,
			approved: None,
		}
	}

	#[test]
	fn booking_date_must_be_after_today() {
		let today = date(2026, 10, 19);

		assert!(validate_booking_date_on(date(2026, 10, 20), today).is_ok());

		let same_day = validate_booking_date_on(today, today).unwrap_err();
		let past = validate_booking_date_on(date(2026, 1, 1), today).unwrap_err();

		assert_eq!(same_day.code, "past-date");
		assert_eq!(past.to_string(), PAST_DATE_MESSAGE);
	}

	#[test]
	fn validation_rejects_today() {
		let today = Utc::now().date_naive();

		let err: Error = new_booking(today).validate().unwrap_err().into();

		assert!(
			matches!(&err, Error::ValidationError(m) if m == PAST_DATE_MESSAGE)
		);
	}

	#[test]
	fn validation_accepts_tomorrow() {
		assert!(new_booking(default_booking_date()).validate().is_ok());
	}

	#[test]
	fn form_defaults_follow_the_booking_form() {
		let booking: NewBooking = serde_json::from_value(serde_json::json!({
			"client_id": 3,
			"location_id": 1,
			"service_id": 2,
			"booking_duration": "All day",
		}))
		.unwrap();

		assert_eq!(booking.booking_date, default_booking_date());
		assert_eq!(booking.booking_start, BookingHour::T0900);
		assert_eq!(booking.booking_end, BookingHour::T0900);
		assert_eq!(booking.status, None);
		assert_eq!(booking.approved, None);
	}

	#[test]
	fn duration_has_no_default() {
		let result = serde_json::from_value::<NewBooking>(serde_json::json!({
			"client_id": 3,
			"location_id": 1,
			"service_id": 2,
		}));

		assert!(result.is_err());
	}

	#[test]
	fn slot_covers_location_service_date_and_times() {
		let booking = new_booking(date(2026, 10, 20));
		let slot = booking.slot();

		assert_eq!(slot.location_id, 1);
		assert_eq!(slot.service_id, 1);
		assert_eq!(slot.booking_date, date(2026, 10, 20));
		assert_eq!(slot.booking_start, BookingHour::T0900);
		assert_eq!(slot.booking_end, BookingHour::T1000);
	}

	#[test]
	fn cancel_and_approve_updates() {
		let cancel = BookingUpdate::cancel();
		let approve = BookingUpdate::approve();

		assert_eq!(cancel.status, Some(BookingStatus::Cancelled));
		assert_eq!(cancel.approved, None);
		assert_eq!(approve.status, Some(BookingStatus::Valid));
		assert_eq!(approve.approved, Some(true));
	}

	#[test]
	fn display_names_client_service_and_slot() {
		let timestamp = Utc.from_utc_datetime(&NaiveDateTime::new(
			date(2026, 10, 19),
			NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
		));

		let mut booking = Booking {
			primitive: PrimitiveBooking {
				id:               1,
				client_id:        1,
				location_id:      Some(1),
				service_id:       Some(1),
				booking_date:     date(2026, 10, 20),
				booking_duration: BookingDuration::OneHour,
				booking_start:    BookingHour::T0900,
				booking_end:      BookingHour::T1000,
				created_on:       timestamp,
				updated_on:       timestamp,
				status:           BookingStatus::Cancelled,
				approved:         false,
			},
			client:    PrimitiveProfile {
				id:         1,
				username:   "ada".to_string(),
				email:      None,
				created_at: timestamp,
			},
			location:  Some(PrimitiveLocation {
				location_id:    1,
				location_name:  OfficeLocation::BrooklynHouse,
				slug:           "brooklyn-house".to_string(),
				featured_image: "placeholder".to_string(),
			}),
			service:   Some(PrimitiveService {
				id:             1,
				space_type:     SpaceType::Seat1,
				content:        String::new(),
				featured_image: "placeholder".to_string(),
				timestamp,
			}),
		};

		assert_eq!(
			booking.to_string(),
			"ada booked Seat1 | 2026-10-20 | 09:00 am | 10:00 am"
		);

		booking.service = None;

		assert_eq!(
			booking.to_string(),
			"ada booked None | 2026-10-20 | 09:00 am | 10:00 am"
		);
	}
}
