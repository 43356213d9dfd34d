use std::fmt;

use chrono::{DateTime, Utc};
use common::{DbConn, Error};
use db::enquiry;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A message sent through the contact form
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = enquiry)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveEnquiry {
	pub id:      i32,
	pub name:    String,
	pub email:   String,
	pub subject: String,
	pub message: String,
	pub date:    DateTime<Utc>,
}

impl fmt::Display for PrimitiveEnquiry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "from {} | subject: {}", self.name, self.subject)
	}
}

impl PrimitiveEnquiry {
	/// Get a [`PrimitiveEnquiry`] by its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(e_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let enquiry = conn
			.interact(move |conn| {
				use self::enquiry::dsl::*;

				enquiry.find(e_id).select(Self::as_select()).get_result(conn)
			})
			.await??;

		Ok(enquiry)
	}

	/// Get all enquiries, newest first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let enquiries = conn
			.interact(|conn| {
				use self::enquiry::dsl::*;

				enquiry
					.order((date.desc(), id.desc()))
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(enquiries)
	}

	/// Delete a [`PrimitiveEnquiry`] given its id
	#[instrument(skip(conn))]
	pub async fn delete_by_id(e_id: i32, conn: &DbConn) -> Result<(), Error> {
		conn.interact(move |conn| {
			use self::enquiry::dsl::*;

			diesel::delete(enquiry.find(e_id)).execute(conn)
		})
		.await??;

		info!("deleted enquiry with id {e_id}");

		Ok(())
	}
}
