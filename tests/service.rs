use deskhq::Error;
use deskhq::models::{NewService, PrimitiveService, ServiceUpdate, SpaceType};

mod common;

use common::TestEnv;

#[tokio::test(flavor = "multi_thread")]
async fn create_service_duplicate_space_type() {
	let env = TestEnv::new().await;
	let conn = env.conn().await;

	let err = NewService {
		space_type:     SpaceType::Seat1,
		content:        String::new(),
		featured_image: "placeholder".to_string(),
	}
	.insert(&conn)
	.await
	.unwrap_err();

	assert!(
		matches!(&err, Error::Duplicate(m) if m == "space_type is already in use")
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_service_unique_space_type() {
	let env = TestEnv::new().await;
	let conn = env.conn().await;

	let created = NewService {
		space_type:     SpaceType::Seat20,
		content:        "Corner desk".to_string(),
		featured_image: "placeholder".to_string(),
	}
	.insert(&conn)
	.await
	.unwrap();

	let fetched = PrimitiveService::get_by_space_type(SpaceType::Seat20, &conn)
		.await
		.unwrap();

	assert_eq!(created.id, fetched.id);
	assert_eq!(fetched.to_string(), "Seat20");
	assert_eq!(fetched.space_type.label(), "S20");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_services_newest_first() {
	let env = TestEnv::new().await;
	let conn = env.conn().await;

	let all = PrimitiveService::get_all(&conn).await.unwrap();
	let ids: Vec<i32> = all.iter().map(|s| s.id).collect();

	assert_eq!(ids, vec![env.fixtures.seat2.id, env.fixtures.seat1.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_service_refreshes_timestamp() {
	let env = TestEnv::new().await;
	let conn = env.conn().await;

	let update = ServiceUpdate {
		content: Some("Window seat with a view".to_string()),
		..Default::default()
	};

	let updated = update.apply_to(env.fixtures.seat1.id, &conn).await.unwrap();

	assert_eq!(updated.content, "Window seat with a view");
	assert!(updated.timestamp > env.fixtures.seat1.timestamp);

	// The refreshed service now sorts first
	let all = PrimitiveService::get_all(&conn).await.unwrap();

	assert_eq!(all[0].id, env.fixtures.seat1.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_service() {
	let env = TestEnv::new().await;
	let conn = env.conn().await;

	PrimitiveService::delete_by_id(env.fixtures.seat2.id, &conn).await.unwrap();

	let err = PrimitiveService::get_by_id(env.fixtures.seat2.id, &conn)
		.await
		.unwrap_err();

	assert!(matches!(err, Error::NotFound(_)));
}
