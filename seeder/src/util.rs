use std::collections::HashSet;

use clap::Error;
use clap::error::ErrorKind;
use common::DbConn;
use diesel::PgConnection;
use rand::distr::Alphanumeric;
use rand::{Rng, rng};

/// Generate a unique set of items using a closure
///
/// Every item gets a random suffix, `max_len` bounds the full value
pub fn generate_unique_set<F>(
	count: usize,
	max_len: usize,
	mut f: F,
) -> Vec<String>
where
	F: FnMut() -> String,
{
	let mut set = HashSet::with_capacity(count);
	let mut rng = rng();

	while set.len() < count {
		let mut value = f();
		value.truncate(max_len.saturating_sub(7));
		value.push('_');
		value.extend((0..6).map(|_| rng.sample(Alphanumeric) as char));
		set.insert(value);
	}

	set.into_iter().collect()
}

/// Map any displayable failure onto a CLI error
pub fn io_error(e: impl std::fmt::Display) -> Error {
	Error::raw(ErrorKind::Io, format!("{e}\n"))
}

/// Generic batch insertion function using closure-based approach
pub async fn batch_insert<T, F>(
	conn: &DbConn,
	mut items: Vec<T>,
	chunk_size: usize,
	inserter: F,
) -> Result<usize, Error>
where
	T: Send + 'static,
	F: Fn(&mut PgConnection, &[T]) -> Result<usize, diesel::result::Error>
		+ Send
		+ Copy
		+ 'static,
{
	let size = items.len();
	let mut total = 0;

	while !items.is_empty() {
		let chunk =
			items.drain(..chunk_size.min(items.len())).collect::<Vec<_>>();
		let chunk_len = chunk.len();

		let insert_len = conn
			.interact(move |c| inserter(c, &chunk))
			.await
			.map_err(io_error)?
			.map_err(io_error)?;

		total += insert_len;

		println!("Inserted {total}/{size} items");

		if insert_len != chunk_len {
			return Err(io_error(format!(
				"Inserted {insert_len} items but expected {chunk_len}"
			)));
		}
	}

	Ok(total)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unique_set_has_requested_size() {
		let set = generate_unique_set(50, 150, || "desk".to_string());

		assert_eq!(set.len(), 50);
		assert!(set.iter().all(|v| v.starts_with("desk_") && v.len() == 11));
	}

	#[test]
	fn unique_set_respects_max_len() {
		let set = generate_unique_set(10, 20, || "a".repeat(40));

		assert!(set.iter().all(|v| v.len() == 20));
	}
}
