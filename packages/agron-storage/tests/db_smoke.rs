use agron_storage::{
	db::Db,
	models::{NewChatQuery, NewCropRecommendation, NewDiseaseDetection},
	queries,
};
use agron_testkit::TestDatabase;

async fn fresh_db(test_db: &TestDatabase) -> Db {
	let db = Db::connect(&test_db.sqlite_config(2)).await.expect("connect failed");

	db.ensure_schema().await.expect("schema failed");
	// Re-running must be a no-op.
	db.ensure_schema().await.expect("schema rerun failed");

	db
}

fn sample_recommendation(crop: &str) -> NewCropRecommendation<'_> {
	NewCropRecommendation {
		nitrogen: 90.,
		phosphorus: 42.,
		potassium: 43.,
		temperature: 21.,
		humidity: 82.,
		ph: 6.5,
		rainfall: 203.,
		recommended_crop: crop,
		confidence: 87.5,
		source: "rules",
	}
}

#[tokio::test]
async fn inserts_are_listed_newest_first() {
	let test_db = TestDatabase::new().expect("temp db failed");
	let db = fresh_db(&test_db).await;

	queries::insert_crop_recommendation(&db, &sample_recommendation("rice"))
		.await
		.expect("insert failed");
	queries::insert_crop_recommendation(&db, &sample_recommendation("maize"))
		.await
		.expect("insert failed");

	let rows = queries::list_crop_recommendations(&db, 10).await.expect("list failed");

	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0].recommended_crop, "maize");
	assert_eq!(rows[1].recommended_crop, "rice");
	assert!(rows[0].id > rows[1].id);
}

#[tokio::test]
async fn list_honors_the_limit() {
	let test_db = TestDatabase::new().expect("temp db failed");
	let db = fresh_db(&test_db).await;

	for _ in 0..5 {
		queries::insert_chat_query(
			&db,
			&NewChatQuery { question: "hello", answer: "Hello!", chatbot_type: "offline" },
		)
		.await
		.expect("insert failed");
	}

	let rows = queries::list_chat_queries(&db, 3).await.expect("list failed");

	assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn clear_all_empties_every_table() {
	let test_db = TestDatabase::new().expect("temp db failed");
	let db = fresh_db(&test_db).await;

	queries::insert_crop_recommendation(&db, &sample_recommendation("rice"))
		.await
		.expect("insert failed");
	queries::insert_disease_detection(
		&db,
		&NewDiseaseDetection {
			file_name: "leaf.jpg",
			disease: "Apple Scab",
			confidence: 75.,
			pesticide: "Mancozeb",
			source: "heuristic",
		},
	)
	.await
	.expect("insert failed");
	queries::insert_chat_query(
		&db,
		&NewChatQuery { question: "hi", answer: "Hello!", chatbot_type: "offline" },
	)
	.await
	.expect("insert failed");

	queries::clear_all(&db).await.expect("clear failed");

	assert!(queries::list_crop_recommendations(&db, 10).await.expect("list failed").is_empty());
	assert!(queries::list_disease_detections(&db, 10).await.expect("list failed").is_empty());
	assert!(queries::list_chat_queries(&db, 10).await.expect("list failed").is_empty());
}

#[tokio::test]
async fn statistics_count_and_rank() {
	let test_db = TestDatabase::new().expect("temp db failed");
	let db = fresh_db(&test_db).await;

	for crop in ["rice", "rice", "maize"] {
		queries::insert_crop_recommendation(&db, &sample_recommendation(crop))
			.await
			.expect("insert failed");
	}
	for disease in ["Apple Scab", "Apple Scab", "Healthy"] {
		queries::insert_disease_detection(
			&db,
			&NewDiseaseDetection {
				file_name: "leaf.jpg",
				disease,
				confidence: 75.,
				pesticide: "Mancozeb",
				source: "heuristic",
			},
		)
		.await
		.expect("insert failed");
	}

	let stats = queries::statistics(&db).await.expect("statistics failed");

	assert_eq!(stats.total_recommendations, 3);
	assert_eq!(stats.total_detections, 3);
	assert_eq!(stats.total_chat_queries, 0);
	assert_eq!(stats.top_crop.as_deref(), Some("rice"));
	// Healthy never tops the disease leaderboard.
	assert_eq!(stats.top_disease.as_deref(), Some("Apple Scab"));
}
