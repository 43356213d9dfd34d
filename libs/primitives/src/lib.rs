#[macro_use]
extern crate tracing;

mod booking;
mod enquiry;
mod location;
mod profile;
mod service;

pub use booking::*;
pub use enquiry::*;
pub use location::*;
pub use profile::*;
pub use service::*;
