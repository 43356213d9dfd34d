use std::fmt;

use chrono::{DateTime, Utc};
use common::{DbConn, Error};
use db::profile;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// The client a booking belongs to
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = profile)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveProfile {
	pub id:         i32,
	pub username:   String,
	pub email:      Option<String>,
	pub created_at: DateTime<Utc>,
}

impl fmt::Display for PrimitiveProfile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.username)
	}
}

impl PrimitiveProfile {
	/// Get a [`PrimitiveProfile`] by its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(p_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let profile = conn
			.interact(move |conn| {
				use self::profile::dsl::*;

				profile.find(p_id).select(Self::as_select()).get_result(conn)
			})
			.await??;

		Ok(profile)
	}

	/// Get a [`PrimitiveProfile`] by its username
	#[instrument(skip(conn))]
	pub async fn get_by_username(
		name: String,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let profile = conn
			.interact(move |conn| {
				use self::profile::dsl::*;

				profile
					.filter(username.eq(name))
					.select(Self::as_select())
					.get_result(conn)
			})
			.await??;

		Ok(profile)
	}
}
