use deadpool_diesel::postgres::{Manager, Pool};

#[derive(Clone, Debug)]
pub struct Config {
	pub database_url:       String,
	pub database_pool_size: Option<usize>,
}

impl Config {
	fn get_env_var(var: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"))
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if an environment variable is missing or malformed
	#[must_use]
	pub fn from_env() -> Self {
		let database_url = Self::get_env_var("DATABASE_URL");

		let database_pool_size = std::env::var("DATABASE_POOL_SIZE")
			.ok()
			.map(|size| {
				size.parse::<usize>().unwrap_or_else(|_| {
					panic!("DATABASE_POOL_SIZE must be a positive integer")
				})
			});

		Self { database_url, database_pool_size }
	}

	/// Create a database pool for the given config
	///
	/// # Panics
	/// Panics if creating the pool fails
	#[must_use]
	pub fn create_database_pool(&self) -> Pool {
		let manager = Manager::new(
			self.database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		let mut builder = Pool::builder(manager);

		if let Some(size) = self.database_pool_size {
			builder = builder.max_size(size);
		}

		builder.build().unwrap()
	}
}
