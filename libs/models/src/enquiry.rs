use common::{DbConn, Error};
use db::enquiry;
use diesel::pg::Pg;
use diesel::prelude::*;
use primitives::PrimitiveEnquiry;
use serde::{Deserialize, Serialize};
use validator::Validate;
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, Insertable, Serialize, Validate)]
#[diesel(table_name = enquiry)]
#[diesel(check_for_backend(Pg))]
pub struct NewEnquiry {
	#[validate(length(
		min = 1,
		max = 50,
		message = "name must be between 1 and 50 characters long",
		code = "name-length"
	))]
	pub name:    String,
	#[validate(email(message = "invalid email", code = "email"))]
	#[validate(length(
		max = 50,
		message = "email must be at most 50 characters long",
		code = "email-length"
	))]
	pub email:   String,
	#[validate(length(
		min = 1,
		max = 80,
		message = "subject must be between 1 and 80 characters long",
		code = "subject-length"
	))]
	pub subject: String,
	#[validate(length(
		min = 1,
		max = 1000,
		message = "message must be between 1 and 1000 characters long",
		code = "message-length"
	))]
	pub message: String,
}

impl NewEnquiry {
	/// Insert this [`NewEnquiry`], the timestamp is set by the database
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<PrimitiveEnquiry, Error> {
		self.validate()?;

		let enquiry = conn
			.interact(|conn| {
				use self::enquiry::dsl::*;

				diesel::insert_into(enquiry)
					.values(self)
					.returning(PrimitiveEnquiry::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created enquiry with id {}", enquiry.id);

		Ok(enquiry)
	}
}
