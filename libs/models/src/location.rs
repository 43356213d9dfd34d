use std::sync::LazyLock;

use common::{DbConn, Error};
use db::{OfficeLocation, location};
use diesel::pg::Pg;
use diesel::prelude::*;
use primitives::{PLACEHOLDER_IMAGE, PrimitiveLocation};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;
use validator_derive::Validate;

static SLUG_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap());

pub(crate) fn placeholder_image() -> String {
	PLACEHOLDER_IMAGE.to_string()
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize, Validate)]
#[diesel(table_name = location)]
#[diesel(check_for_backend(Pg))]
pub struct NewLocation {
	/// Left empty the database picks `1`, so a second location needs an
	/// explicit id
	#[serde(default)]
	pub location_id:    Option<i32>,
	pub location_name:  OfficeLocation,
	#[validate(regex(
		path = *SLUG_REGEX,
		message = "slug may only contain letters, numbers, dashes, or underscores",
		code = "slug-regex"
	))]
	#[validate(length(
		min = 1,
		max = 200,
		message = "slug must be between 1 and 200 characters long",
		code = "slug-length"
	))]
	pub slug:           String,
	#[serde(default = "placeholder_image")]
	#[validate(length(
		min = 1,
		max = 255,
		message = "image reference must be between 1 and 255 characters long",
		code = "image-length"
	))]
	pub featured_image: String,
}

impl NewLocation {
	/// Insert this [`NewLocation`]
	///
	/// Fails with [`Error::Duplicate`] if the slug or id is already taken
	#[instrument(skip(conn))]
	pub async fn insert(
		self,
		conn: &DbConn,
	) -> Result<PrimitiveLocation, Error> {
		self.validate()?;

		let location = conn
			.interact(|conn| {
				use self::location::dsl::*;

				diesel::insert_into(location)
					.values(self)
					.returning(PrimitiveLocation::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created location {location:?}");

		Ok(location)
	}
}

#[derive(AsChangeset, Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[diesel(table_name = location)]
#[diesel(check_for_backend(Pg))]
pub struct LocationUpdate {
	pub location_name:  Option<OfficeLocation>,
	#[validate(regex(
		path = *SLUG_REGEX,
		message = "slug may only contain letters, numbers, dashes, or underscores",
		code = "slug-regex"
	))]
	#[validate(length(
		min = 1,
		max = 200,
		message = "slug must be between 1 and 200 characters long",
		code = "slug-length"
	))]
	pub slug:           Option<String>,
	#[validate(length(
		min = 1,
		max = 255,
		message = "image reference must be between 1 and 255 characters long",
		code = "image-length"
	))]
	pub featured_image: Option<String>,
}

impl LocationUpdate {
	fn is_empty(&self) -> bool {
		self.location_name.is_none()
			&& self.slug.is_none()
			&& self.featured_image.is_none()
	}

	/// Apply this update to the [`PrimitiveLocation`] with the given id
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		l_id: i32,
		conn: &DbConn,
	) -> Result<PrimitiveLocation, Error> {
		self.validate()?;

		if self.is_empty() {
			return PrimitiveLocation::get_by_id(l_id, conn).await;
		}

		let location = conn
			.interact(move |conn| {
				use self::location::dsl::*;

				diesel::update(location.find(l_id))
					.set(self)
					.returning(PrimitiveLocation::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("updated location {location:?}");

		Ok(location)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn brooklyn() -> NewLocation {
		NewLocation {
			location_id:    None,
			location_name:  OfficeLocation::BrooklynHouse,
			slug:           "brooklyn-house".to_string(),
			featured_image: placeholder_image(),
		}
	}

	#[test]
	fn slug_charset_is_enforced() {
		assert!(brooklyn().validate().is_ok());

		let spaced =
			NewLocation { slug: "brooklyn house".to_string(), ..brooklyn() };
		let empty = NewLocation { slug: String::new(), ..brooklyn() };
		let long = NewLocation { slug: "b".repeat(201), ..brooklyn() };

		assert!(spaced.validate().is_err());
		assert!(empty.validate().is_err());
		assert!(long.validate().is_err());
	}

	#[test]
	fn image_defaults_to_placeholder() {
		let location: NewLocation = serde_json::from_value(serde_json::json!({
			"location_name": "DESK HQ Dockyard Place (55 PARADE STREET LONDON E20 3YB)",
			"slug": "dockyard-place",
		}))
		.unwrap();

		assert_eq!(location.featured_image, "placeholder");
		assert_eq!(location.location_id, None);
		assert_eq!(location.location_name, OfficeLocation::DockyardPlace);
	}

	#[test]
	fn unknown_office_is_rejected() {
		let result = serde_json::from_value::<NewLocation>(serde_json::json!({
			"location_name": "DESK HQ Brooklyn House (3 STONE AVENUE LONDON SU5 2AZ)",
			"slug": "brooklyn-house",
		}));

		assert!(result.is_err());
	}

	#[test]
	fn update_validates_only_present_fields() {
		assert!(LocationUpdate::default().validate().is_ok());
		assert!(LocationUpdate::default().is_empty());

		let bad = LocationUpdate {
			slug: Some("no spaces allowed".to_string()),
			..Default::default()
		};

		assert!(bad.validate().is_err());
		assert!(!bad.is_empty());
	}
}
