use chrono::{DateTime, NaiveDate, Utc};
use common::{DbConn, Error};
use db::{BookingDuration, BookingHour, BookingStatus, booking};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = booking)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveBooking {
	pub id:               i32,
	pub client_id:        i32,
	pub location_id:      Option<i32>,
	pub service_id:       Option<i32>,
	pub booking_date:     NaiveDate,
	pub booking_duration: BookingDuration,
	pub booking_start:    BookingHour,
	pub booking_end:      BookingHour,
	pub created_on:       DateTime<Utc>,
	pub updated_on:       DateTime<Utc>,
	pub status:           BookingStatus,
	pub approved:         bool,
}

/// The exclusive part of a booking, no two bookings may share one
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Slot {
	pub location_id:   i32,
	pub service_id:    i32,
	pub booking_date:  NaiveDate,
	pub booking_start: BookingHour,
	pub booking_end:   BookingHour,
}

impl PrimitiveBooking {
	/// Get a [`PrimitiveBooking`] by its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(b_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let booking = conn
			.interact(move |conn| {
				use self::booking::dsl::*;

				booking.find(b_id).select(Self::as_select()).get_result(conn)
			})
			.await??;

		Ok(booking)
	}

	/// Count the bookings occupying a given [`Slot`], regardless of their
	/// status
	#[instrument(skip(conn))]
	pub async fn count_for_slot(slot: Slot, conn: &DbConn) -> Result<i64, Error> {
		let count = conn
			.interact(move |conn| {
				use self::booking::dsl::*;

				booking
					.filter(location_id.eq(slot.location_id))
					.filter(service_id.eq(slot.service_id))
					.filter(booking_date.eq(slot.booking_date))
					.filter(booking_start.eq(slot.booking_start))
					.filter(booking_end.eq(slot.booking_end))
					.count()
					.get_result(conn)
			})
			.await??;

		Ok(count)
	}

	/// The [`Slot`] this booking occupies, if it still references both a
	/// location and a service
	#[must_use]
	pub fn slot(&self) -> Option<Slot> {
		Some(Slot {
			location_id:   self.location_id?,
			service_id:    self.service_id?,
			booking_date:  self.booking_date,
			booking_start: self.booking_start,
			booking_end:   self.booking_end,
		})
	}

	/// Delete a [`PrimitiveBooking`] given its id
	#[instrument(skip(conn))]
	pub async fn delete_by_id(b_id: i32, conn: &DbConn) -> Result<(), Error> {
		conn.interact(move |conn| {
			use self::booking::dsl::*;

			diesel::delete(booking.find(b_id)).execute(conn)
		})
		.await??;

		info!("deleted booking with id {b_id}");

		Ok(())
	}
}
