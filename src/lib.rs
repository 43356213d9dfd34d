//! DESK HQ booking data layer
//!
//! Ties the workspace together: configuration, the database pool and the
//! embedded schema migrations. Entity operations live in [`models`].

#[macro_use]
extern crate tracing;

use common::InternalServerError;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

mod config;

pub use common::{DbConn, DbPool, Error};
pub use config::Config;
pub use models;

/// Schema migrations compiled into the binary
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Apply every pending migration, returning how many ran
///
/// # Errors
/// Errors if a migration fails to apply or the connection is unusable
#[instrument(skip(conn))]
pub async fn run_migrations(conn: &DbConn) -> Result<usize, Error> {
	let applied = conn
		.interact(|conn| {
			conn.run_pending_migrations(MIGRATIONS).map(|versions| {
				versions.iter().map(ToString::to_string).collect::<Vec<_>>()
			})
		})
		.await?
		.map_err(InternalServerError::MigrationError)?;

	for version in &applied {
		info!("applied migration {version}");
	}

	Ok(applied.len())
}
