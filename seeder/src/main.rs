mod util;

use std::env;

use clap::{Error, Parser};
use common::DbConn;
use deadpool_diesel::postgres::{Manager, Pool};
use diesel::RunQueryDsl;
use fake::Fake;
use fake::faker::internet::raw::{SafeEmail, Username};
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::Name;
use fake::locales::EN;
use models::{
	NewEnquiry,
	NewLocation,
	NewProfile,
	NewService,
	OfficeLocation,
	SpaceType,
};
use validator::Validate;

use crate::util::{batch_insert, generate_unique_set, io_error};

#[derive(Parser, Debug)]
struct Opt {
	#[arg(long, short = 'p', default_value_t = 100)]
	profiles:  usize,
	#[arg(long, short = 'e', default_value_t = 50)]
	enquiries: usize,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let cli = Opt::parse();
	let conn = get_conn().await;

	println!("Seeding office locations…");
	let inserted = seed_locations(&conn).await?;
	println!("Inserted {inserted} new locations");

	println!("Seeding services…");
	let inserted = seed_services(&conn).await?;
	println!("Inserted {inserted} new services");

	if cli.profiles > 0 {
		println!("Seeding {} profiles…", cli.profiles);
		let inserted = seed_profiles(&conn, cli.profiles).await?;
		println!("Inserted {inserted} unique profiles");
	}

	if cli.enquiries > 0 {
		println!("Seeding {} enquiries…", cli.enquiries);
		let inserted = seed_enquiries(&conn, cli.enquiries).await?;
		println!("Inserted {inserted} enquiries");
	}

	Ok(())
}

/// Get a database connection from the pool
async fn get_conn() -> DbConn {
	let database_url = env::var("DATABASE_URL").expect("DATABASE_URL missing");

	let manager = Manager::new(database_url, deadpool_diesel::Runtime::Tokio1);
	let pool = Pool::builder(manager).build().expect("Failed to create pool");

	pool.get().await.expect("Failed to get a database connection")
}

/// Count an insert that may already have happened on a previous run
fn count_new<T>(result: Result<T, common::Error>) -> Result<usize, Error> {
	match result {
		Ok(_) => Ok(1),
		Err(common::Error::Duplicate(_)) => Ok(0),
		Err(e) => Err(io_error(e)),
	}
}

/// Seed both office locations with fixed ids, skipping existing rows
async fn seed_locations(conn: &DbConn) -> Result<usize, Error> {
	let mut inserted = 0;

	for (location_id, location_name) in (1..).zip(OfficeLocation::ALL) {
		let slug = match location_name {
			OfficeLocation::BrooklynHouse => "brooklyn-house",
			OfficeLocation::DockyardPlace => "dockyard-place",
		};

		let location = NewLocation {
			location_id: Some(location_id),
			location_name,
			slug: slug.to_string(),
			featured_image: "placeholder".to_string(),
		};

		inserted += count_new(location.insert(conn).await)?;
	}

	Ok(inserted)
}

/// Seed a service for every seat, skipping existing rows
async fn seed_services(conn: &DbConn) -> Result<usize, Error> {
	let mut inserted = 0;

	for space_type in SpaceType::ALL {
		let service = NewService {
			space_type,
			content: format!("Hot desk {}", space_type.label()),
			featured_image: "placeholder".to_string(),
		};

		inserted += count_new(service.insert(conn).await)?;
	}

	Ok(inserted)
}

/// Seed profiles with unique usernames and emails
async fn seed_profiles(conn: &DbConn, count: usize) -> Result<usize, Error> {
	let usernames =
		generate_unique_set(count, 150, || Username(EN).fake::<String>());

	let profiles: Vec<NewProfile> = usernames
		.into_iter()
		.map(|username| {
			let email = Some(format!("{username}@deskhq.test"));

			NewProfile { username, email }
		})
		.filter(|p| p.validate().is_ok())
		.collect();

	batch_insert(conn, profiles, 8192, |conn, chunk| {
		use models::schema::profile::dsl::*;
		diesel::insert_into(profile).values(chunk).execute(conn)
	})
	.await
}

/// Seed contact form enquiries, dropping generated rows that would not pass
/// validation
async fn seed_enquiries(conn: &DbConn, count: usize) -> Result<usize, Error> {
	let enquiries: Vec<NewEnquiry> = (0..count)
		.map(|_| {
			NewEnquiry {
				name:    Name(EN).fake(),
				email:   SafeEmail(EN).fake(),
				subject: Sentence(EN, 2..6).fake(),
				message: Paragraph(EN, 1..4).fake(),
			}
		})
		.filter(|e| e.validate().is_ok())
		.collect();

	batch_insert(conn, enquiries, 2 << 10, |conn, chunk| {
		use models::schema::enquiry::dsl::*;
		diesel::insert_into(enquiry).values(chunk).execute(conn)
	})
	.await
}
