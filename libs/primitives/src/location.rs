use std::fmt;

use common::{DbConn, Error};
use db::{OfficeLocation, location};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Placeholder image reference used until a real image is attached
pub const PLACEHOLDER_IMAGE: &str = "placeholder";

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = location)]
#[diesel(primary_key(location_id))]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveLocation {
	pub location_id:    i32,
	pub location_name:  OfficeLocation,
	pub slug:           String,
	pub featured_image: String,
}

impl fmt::Display for PrimitiveLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.location_name.as_str())
	}
}

impl PrimitiveLocation {
	/// Get a [`PrimitiveLocation`] by its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(l_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let location = conn
			.interact(move |conn| {
				use self::location::dsl::*;

				location.find(l_id).select(Self::as_select()).get_result(conn)
			})
			.await??;

		Ok(location)
	}

	/// Get a [`PrimitiveLocation`] by its slug
	#[instrument(skip(conn))]
	pub async fn get_by_slug(
		l_slug: String,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let location = conn
			.interact(move |conn| {
				use self::location::dsl::*;

				location
					.filter(slug.eq(l_slug))
					.select(Self::as_select())
					.get_result(conn)
			})
			.await??;

		Ok(location)
	}

	/// Get all locations ordered by their id
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let locations = conn
			.interact(|conn| {
				use self::location::dsl::*;

				location
					.order(location_id.asc())
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(locations)
	}

	/// Delete a [`PrimitiveLocation`] given its id
	///
	/// Bookings at this location are deleted along with it
	#[instrument(skip(conn))]
	pub async fn delete_by_id(l_id: i32, conn: &DbConn) -> Result<(), Error> {
		conn.interact(move |conn| {
			use self::location::dsl::*;

			diesel::delete(location.find(l_id)).execute(conn)
		})
		.await??;

		info!("deleted location with id {l_id}");

		Ok(())
	}
}
