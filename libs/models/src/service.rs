use common::{DbConn, Error};
use db::{SpaceType, service};
use diesel::pg::Pg;
use diesel::prelude::*;
use primitives::PrimitiveService;
use serde::{Deserialize, Serialize};
use validator::Validate;
use validator_derive::Validate;

use crate::location::placeholder_image;

#[derive(Clone, Debug, Deserialize, Insertable, Serialize, Validate)]
#[diesel(table_name = service)]
#[diesel(check_for_backend(Pg))]
pub struct NewService {
	pub space_type:     SpaceType,
	#[serde(default)]
	pub content:        String,
	#[serde(default = "placeholder_image")]
	#[validate(length(
		min = 1,
		max = 255,
		message = "image reference must be between 1 and 255 characters long",
		code = "image-length"
	))]
	pub featured_image: String,
}

impl NewService {
	/// Insert this [`NewService`]
	///
	/// Fails with [`Error::Duplicate`] if a service for this seat exists
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<PrimitiveService, Error> {
		self.validate()?;

		let service = conn
			.interact(|conn| {
				use self::service::dsl::*;

				diesel::insert_into(service)
					.values(self)
					.returning(PrimitiveService::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created service {service:?}");

		Ok(service)
	}
}

#[derive(AsChangeset, Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[diesel(table_name = service)]
#[diesel(check_for_backend(Pg))]
pub struct ServiceUpdate {
	pub space_type:     Option<SpaceType>,
	pub content:        Option<String>,
	#[validate(length(
		min = 1,
		max = 255,
		message = "image reference must be between 1 and 255 characters long",
		code = "image-length"
	))]
	pub featured_image: Option<String>,
}

impl ServiceUpdate {
	/// Apply this update to the [`PrimitiveService`] with the given id
	///
	/// Saving always refreshes the service timestamp, even if nothing else
	/// changed
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		s_id: i32,
		conn: &DbConn,
	) -> Result<PrimitiveService, Error> {
		self.validate()?;

		let service = conn
			.interact(move |conn| {
				use self::service::dsl::*;

				diesel::update(service.find(s_id))
					.set((self, timestamp.eq(diesel::dsl::now)))
					.returning(PrimitiveService::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("updated service {service:?}");

		Ok(service)
	}
}
