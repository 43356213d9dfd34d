//! Fixed value sets stored in the booking tables
//!
//! The stored strings are part of the persisted data, any value outside of
//! these sets is invalid.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Integer;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// A value that could not be parsed into one of the fixed value sets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownValue {
	pub set:   &'static str,
	pub value: String,
}

impl fmt::Display for UnknownValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' is not a valid {}", self.value, self.set)
	}
}

impl std::error::Error for UnknownValue {}

/// Implement [`Display`](fmt::Display) and [`FromStr`] in terms of the
/// stored string of every variant
macro_rules! impl_value_set {
	($name:ident, $set:literal) => {
		impl $name {
			/// Get the stored string of every variant, in declaration order
			#[must_use]
			pub fn get_variants() -> Vec<&'static str> {
				Self::ALL.iter().map(|v| v.as_str()).collect()
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = UnknownValue;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::ALL.iter().copied().find(|v| v.as_str() == s).ok_or_else(
					|| UnknownValue { set: $set, value: s.to_string() },
				)
			}
		}
	};
}

#[derive(
	Clone, Copy, DbEnum, Debug, Default, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::OfficeLocation"]
pub enum OfficeLocation {
	#[default]
	#[db_rename = "DESK HQ Brooklyn House (3 STONE AVENUE LONDON SE5 2AZ)"]
	#[serde(rename = "DESK HQ Brooklyn House (3 STONE AVENUE LONDON SE5 2AZ)")]
	BrooklynHouse,
	#[db_rename = "DESK HQ Dockyard Place (55 PARADE STREET LONDON E20 3YB)"]
	#[serde(rename = "DESK HQ Dockyard Place (55 PARADE STREET LONDON E20 3YB)")]
	DockyardPlace,
}

impl OfficeLocation {
	pub const ALL: [Self; 2] = [Self::BrooklynHouse, Self::DockyardPlace];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::BrooklynHouse => {
				"DESK HQ Brooklyn House (3 STONE AVENUE LONDON SE5 2AZ)"
			},
			Self::DockyardPlace => {
				"DESK HQ Dockyard Place (55 PARADE STREET LONDON E20 3YB)"
			},
		}
	}
}

impl_value_set!(OfficeLocation, "office location");

/// Bookable seat
#[derive(
	Clone, Copy, DbEnum, Debug, Default, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::SpaceType"]
#[DbValueStyle = "verbatim"]
pub enum SpaceType {
	#[default]
	Seat1,
	Seat2,
	Seat3,
	Seat4,
	Seat5,
	Seat6,
	Seat7,
	Seat8,
	Seat9,
	Seat10,
	Seat11,
	Seat12,
	Seat13,
	Seat14,
	Seat15,
	Seat16,
	Seat17,
	Seat18,
	Seat19,
	Seat20,
}

impl SpaceType {
	pub const ALL: [Self; 20] = [
		Self::Seat1,
		Self::Seat2,
		Self::Seat3,
		Self::Seat4,
		Self::Seat5,
		Self::Seat6,
		Self::Seat7,
		Self::Seat8,
		Self::Seat9,
		Self::Seat10,
		Self::Seat11,
		Self::Seat12,
		Self::Seat13,
		Self::Seat14,
		Self::Seat15,
		Self::Seat16,
		Self::Seat17,
		Self::Seat18,
		Self::Seat19,
		Self::Seat20,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Seat1 => "Seat1",
			Self::Seat2 => "Seat2",
			Self::Seat3 => "Seat3",
			Self::Seat4 => "Seat4",
			Self::Seat5 => "Seat5",
			Self::Seat6 => "Seat6",
			Self::Seat7 => "Seat7",
			Self::Seat8 => "Seat8",
			Self::Seat9 => "Seat9",
			Self::Seat10 => "Seat10",
			Self::Seat11 => "Seat11",
			Self::Seat12 => "Seat12",
			Self::Seat13 => "Seat13",
			Self::Seat14 => "Seat14",
			Self::Seat15 => "Seat15",
			Self::Seat16 => "Seat16",
			Self::Seat17 => "Seat17",
			Self::Seat18 => "Seat18",
			Self::Seat19 => "Seat19",
			Self::Seat20 => "Seat20",
		}
	}

	/// Short label shown next to the seat, `S1` for `Seat1`
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Seat1 => "S1",
			Self::Seat2 => "S2",
			Self::Seat3 => "S3",
			Self::Seat4 => "S4",
			Self::Seat5 => "S5",
			Self::Seat6 => "S6",
			Self::Seat7 => "S7",
			Self::Seat8 => "S8",
			Self::Seat9 => "S9",
			Self::Seat10 => "S10",
			Self::Seat11 => "S11",
			Self::Seat12 => "S12",
			Self::Seat13 => "S13",
			Self::Seat14 => "S14",
			Self::Seat15 => "S15",
			Self::Seat16 => "S16",
			Self::Seat17 => "S17",
			Self::Seat18 => "S18",
			Self::Seat19 => "S19",
			Self::Seat20 => "S20",
		}
	}
}

impl_value_set!(SpaceType, "space type");

#[derive(
	Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::BookingDuration"]
pub enum BookingDuration {
	#[db_rename = "1 Hour"]
	#[serde(rename = "1 Hour")]
	OneHour,
	#[db_rename = "2 Hours"]
	#[serde(rename = "2 Hours")]
	TwoHours,
	#[db_rename = "3 Hours"]
	#[serde(rename = "3 Hours")]
	ThreeHours,
	#[db_rename = "4 Hours"]
	#[serde(rename = "4 Hours")]
	FourHours,
	#[db_rename = "5 Hours"]
	#[serde(rename = "5 Hours")]
	FiveHours,
	#[db_rename = "6 Hours"]
	#[serde(rename = "6 Hours")]
	SixHours,
	#[db_rename = "7 Hours"]
	#[serde(rename = "7 Hours")]
	SevenHours,
	#[db_rename = "8 Hours"]
	#[serde(rename = "8 Hours")]
	EightHours,
	#[db_rename = "All day"]
	#[serde(rename = "All day")]
	AllDay,
}

impl BookingDuration {
	pub const ALL: [Self; 9] = [
		Self::OneHour,
		Self::TwoHours,
		Self::ThreeHours,
		Self::FourHours,
		Self::FiveHours,
		Self::SixHours,
		Self::SevenHours,
		Self::EightHours,
		Self::AllDay,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::OneHour => "1 Hour",
			Self::TwoHours => "2 Hours",
			Self::ThreeHours => "3 Hours",
			Self::FourHours => "4 Hours",
			Self::FiveHours => "5 Hours",
			Self::SixHours => "6 Hours",
			Self::SevenHours => "7 Hours",
			Self::EightHours => "8 Hours",
			Self::AllDay => "All day",
		}
	}

	/// Length of the booking in whole hours, [`None`] for a full day
	#[must_use]
	pub fn hours(self) -> Option<u32> {
		match self {
			Self::OneHour => Some(1),
			Self::TwoHours => Some(2),
			Self::ThreeHours => Some(3),
			Self::FourHours => Some(4),
			Self::FiveHours => Some(5),
			Self::SixHours => Some(6),
			Self::SevenHours => Some(7),
			Self::EightHours => Some(8),
			Self::AllDay => None,
		}
	}
}

impl_value_set!(BookingDuration, "booking duration");

/// Half hour slot a booking can start or end on
#[derive(
	Clone, Copy, DbEnum, Debug, Default, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::BookingHour"]
pub enum BookingHour {
	#[default]
	#[db_rename = "09:00 am"]
	#[serde(rename = "09:00 am")]
	T0900,
	#[db_rename = "09:30 am"]
	#[serde(rename = "09:30 am")]
	T0930,
	#[db_rename = "10:00 am"]
	#[serde(rename = "10:00 am")]
	T1000,
	#[db_rename = "10:30 am"]
	#[serde(rename = "10:30 am")]
	T1030,
	#[db_rename = "11:00 am"]
	#[serde(rename = "11:00 am")]
	T1100,
	#[db_rename = "11:30 am"]
	#[serde(rename = "11:30 am")]
	T1130,
	#[db_rename = "12:00 pm"]
	#[serde(rename = "12:00 pm")]
	T1200,
	#[db_rename = "12:30 pm"]
	#[serde(rename = "12:30 pm")]
	T1230,
	#[db_rename = "13:00 pm"]
	#[serde(rename = "13:00 pm")]
	T1300,
	#[db_rename = "13:30 pm"]
	#[serde(rename = "13:30 pm")]
	T1330,
	#[db_rename = "14:00 pm"]
	#[serde(rename = "14:00 pm")]
	T1400,
	#[db_rename = "14:30 pm"]
	#[serde(rename = "14:30 pm")]
	T1430,
	#[db_rename = "15:00 pm"]
	#[serde(rename = "15:00 pm")]
	T1500,
	#[db_rename = "15:30 pm"]
	#[serde(rename = "15:30 pm")]
	T1530,
	#[db_rename = "16:00 pm"]
	#[serde(rename = "16:00 pm")]
	T1600,
	#[db_rename = "16:30 pm"]
	#[serde(rename = "16:30 pm")]
	T1630,
	#[db_rename = "17:00 pm"]
	#[serde(rename = "17:00 pm")]
	T1700,
	#[db_rename = "17:30 pm"]
	#[serde(rename = "17:30 pm")]
	T1730,
}

impl BookingHour {
	pub const ALL: [Self; 18] = [
		Self::T0900,
		Self::T0930,
		Self::T1000,
		Self::T1030,
		Self::T1100,
		Self::T1130,
		Self::T1200,
		Self::T1230,
		Self::T1300,
		Self::T1330,
		Self::T1400,
		Self::T1430,
		Self::T1500,
		Self::T1530,
		Self::T1600,
		Self::T1630,
		Self::T1700,
		Self::T1730,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::T0900 => "09:00 am",
			Self::T0930 => "09:30 am",
			Self::T1000 => "10:00 am",
			Self::T1030 => "10:30 am",
			Self::T1100 => "11:00 am",
			Self::T1130 => "11:30 am",
			Self::T1200 => "12:00 pm",
			Self::T1230 => "12:30 pm",
			Self::T1300 => "13:00 pm",
			Self::T1330 => "13:30 pm",
			Self::T1400 => "14:00 pm",
			Self::T1430 => "14:30 pm",
			Self::T1500 => "15:00 pm",
			Self::T1530 => "15:30 pm",
			Self::T1600 => "16:00 pm",
			Self::T1630 => "16:30 pm",
			Self::T1700 => "17:00 pm",
			Self::T1730 => "17:30 pm",
		}
	}

	/// The wall clock time of this slot
	#[must_use]
	pub fn time(self) -> NaiveTime {
		let (hour, minute) = match self {
			Self::T0900 => (9, 0),
			Self::T0930 => (9, 30),
			Self::T1000 => (10, 0),
			Self::T1030 => (10, 30),
			Self::T1100 => (11, 0),
			Self::T1130 => (11, 30),
			Self::T1200 => (12, 0),
			Self::T1230 => (12, 30),
			Self::T1300 => (13, 0),
			Self::T1330 => (13, 30),
			Self::T1400 => (14, 0),
			Self::T1430 => (14, 30),
			Self::T1500 => (15, 0),
			Self::T1530 => (15, 30),
			Self::T1600 => (16, 0),
			Self::T1630 => (16, 30),
			Self::T1700 => (17, 0),
			Self::T1730 => (17, 30),
		};

		NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
	}
}

impl_value_set!(BookingHour, "booking hour");

/// Administrative status of a booking, stored as an integer
///
/// New bookings default to [`BookingStatus::Cancelled`], not
/// [`BookingStatus::Valid`]. Callers that want a valid booking must say so.
#[derive(
	AsExpression,
	Clone,
	Copy,
	Debug,
	Default,
	Deserialize,
	FromSqlRow,
	PartialEq,
	Eq,
	Serialize,
)]
#[diesel(sql_type = Integer)]
pub enum BookingStatus {
	Valid,
	#[default]
	Cancelled,
}

impl BookingStatus {
	#[must_use]
	pub fn as_i32(self) -> i32 {
		match self {
			Self::Valid => 0,
			Self::Cancelled => 1,
		}
	}

	#[must_use]
	pub fn from_i32(value: i32) -> Option<Self> {
		match value {
			0 => Some(Self::Valid),
			1 => Some(Self::Cancelled),
			_ => None,
		}
	}
}

impl fmt::Display for BookingStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Valid => f.write_str("Valid"),
			Self::Cancelled => f.write_str("Cancelled"),
		}
	}
}

impl ToSql<Integer, Pg> for BookingStatus {
	fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
		match self {
			Self::Valid => <i32 as ToSql<Integer, Pg>>::to_sql(&0, out),
			Self::Cancelled => <i32 as ToSql<Integer, Pg>>::to_sql(&1, out),
		}
	}
}

impl FromSql<Integer, Pg> for BookingStatus {
	fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
		let value = <i32 as FromSql<Integer, Pg>>::from_sql(bytes)?;

		Self::from_i32(value)
			.ok_or_else(|| format!("unrecognized booking status {value}").into())
	}
}
