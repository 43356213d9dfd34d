#[macro_use]
extern crate tracing;

use deskhq::{Config, run_migrations};
use tracing::Level;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.pretty()
		.with_thread_names(true)
		.with_max_level(Level::DEBUG)
		.init();

	// Set up the configuration.
	let config = Config::from_env();

	// Set up the database connection pool.
	let pool = config.create_database_pool();

	let conn = pool.get().await.expect("COULD NOT GET DATABASE CONNECTION");

	match run_migrations(&conn).await {
		Ok(0) => info!("database schema is up to date"),
		Ok(n) => info!("applied {n} pending migration(s)"),
		Err(e) => {
			error!("could not migrate database -- {e}");
			std::process::exit(1);
		},
	}
}
