use std::sync::LazyLock;

use common::{DbConn, Error};
use db::profile;
use diesel::pg::Pg;
use diesel::prelude::*;
use primitives::PrimitiveProfile;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;
use validator_derive::Validate;

static USERNAME_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").unwrap());

#[derive(Clone, Debug, Deserialize, Insertable, Serialize, Validate)]
#[diesel(table_name = profile)]
#[diesel(check_for_backend(Pg))]
pub struct NewProfile {
	#[validate(regex(
		path = *USERNAME_REGEX,
		message = "username may only contain letters, numbers, and @/./+/-/_ characters",
		code = "username-regex"
	))]
	#[validate(length(
		min = 1,
		max = 150,
		message = "username must be between 1 and 150 characters long",
		code = "username-length"
	))]
	pub username: String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email:    Option<String>,
}

impl NewProfile {
	/// Insert this [`NewProfile`]
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<PrimitiveProfile, Error> {
		self.validate()?;

		let profile = conn
			.interact(|conn| {
				use self::profile::dsl::*;

				diesel::insert_into(profile)
					.values(self)
					.returning(PrimitiveProfile::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created profile {profile:?}");

		Ok(profile)
	}
}
