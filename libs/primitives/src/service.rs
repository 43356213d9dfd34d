use std::fmt;

use chrono::{DateTime, Utc};
use common::{DbConn, Error};
use db::{SpaceType, service};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A bookable seat type
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = service)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveService {
	pub id:             i32,
	pub space_type:     SpaceType,
	pub content:        String,
	pub featured_image: String,
	pub timestamp:      DateTime<Utc>,
}

impl fmt::Display for PrimitiveService {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.space_type.as_str())
	}
}

impl PrimitiveService {
	/// Get a [`PrimitiveService`] by its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(s_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let service = conn
			.interact(move |conn| {
				use self::service::dsl::*;

				service.find(s_id).select(Self::as_select()).get_result(conn)
			})
			.await??;

		Ok(service)
	}

	/// Get the [`PrimitiveService`] for a given seat
	#[instrument(skip(conn))]
	pub async fn get_by_space_type(
		seat: SpaceType,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let service = conn
			.interact(move |conn| {
				use self::service::dsl::*;

				service
					.filter(space_type.eq(seat))
					.select(Self::as_select())
					.get_result(conn)
			})
			.await??;

		Ok(service)
	}

	/// Get all services, most recently updated first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let services = conn
			.interact(|conn| {
				use self::service::dsl::*;

				service
					.order((timestamp.desc(), id.desc()))
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(services)
	}

	/// Delete a [`PrimitiveService`] given its id
	#[instrument(skip(conn))]
	pub async fn delete_by_id(s_id: i32, conn: &DbConn) -> Result<(), Error> {
		conn.interact(move |conn| {
			use self::service::dsl::*;

			diesel::delete(service.find(s_id)).execute(conn)
		})
		.await??;

		info!("deleted service with id {s_id}");

		Ok(())
	}
}
