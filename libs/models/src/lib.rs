#[macro_use]
extern crate tracing;

mod booking;
mod enquiry;
mod location;
mod profile;
mod service;

pub use booking::*;
pub use db::{
	BookingDuration,
	BookingHour,
	BookingStatus,
	OfficeLocation,
	SpaceType,
	UnknownValue,
};
pub use enquiry::*;
pub use location::*;
pub use primitives::*;
pub use profile::*;
pub use service::*;

/// Database schema, re-exported for callers that build their own queries
pub mod schema {
	pub use db::{booking, enquiry, location, profile, service};
}
