use time::OffsetDateTime;

use crate::{
	Result,
	db::Db,
	models::{
		ChatQueryRow, CropRecommendationRow, DiseaseDetectionRow, NewChatQuery,
		NewCropRecommendation, NewDiseaseDetection, Statistics,
	},
};

pub async fn insert_crop_recommendation(
	db: &Db,
	new: &NewCropRecommendation<'_>,
) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO crop_recommendations (
	created_at,
	nitrogen,
	phosphorus,
	potassium,
	temperature,
	humidity,
	ph,
	rainfall,
	recommended_crop,
	confidence,
	source
)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
	)
	.bind(OffsetDateTime::now_utc())
	.bind(new.nitrogen)
	.bind(new.phosphorus)
	.bind(new.potassium)
	.bind(new.temperature)
	.bind(new.humidity)
	.bind(new.ph)
	.bind(new.rainfall)
	.bind(new.recommended_crop)
	.bind(new.confidence)
	.bind(new.source)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_disease_detection(db: &Db, new: &NewDiseaseDetection<'_>) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO disease_detections (created_at, file_name, disease, confidence, pesticide, source)
VALUES (?, ?, ?, ?, ?, ?)",
	)
	.bind(OffsetDateTime::now_utc())
	.bind(new.file_name)
	.bind(new.disease)
	.bind(new.confidence)
	.bind(new.pesticide)
	.bind(new.source)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_chat_query(db: &Db, new: &NewChatQuery<'_>) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO chat_queries (created_at, question, answer, chatbot_type)
VALUES (?, ?, ?, ?)",
	)
	.bind(OffsetDateTime::now_utc())
	.bind(new.question)
	.bind(new.answer)
	.bind(new.chatbot_type)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn list_crop_recommendations(
	db: &Db,
	limit: u32,
) -> Result<Vec<CropRecommendationRow>> {
	let rows = sqlx::query_as(
		"\
SELECT *
FROM crop_recommendations
ORDER BY created_at DESC, id DESC
LIMIT ?",
	)
	.bind(limit as i64)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn list_disease_detections(db: &Db, limit: u32) -> Result<Vec<DiseaseDetectionRow>> {
	let rows = sqlx::query_as(
		"\
SELECT *
FROM disease_detections
ORDER BY created_at DESC, id DESC
LIMIT ?",
	)
	.bind(limit as i64)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn list_chat_queries(db: &Db, limit: u32) -> Result<Vec<ChatQueryRow>> {
	let rows = sqlx::query_as(
		"\
SELECT *
FROM chat_queries
ORDER BY created_at DESC, id DESC
LIMIT ?",
	)
	.bind(limit as i64)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Wipes all three history tables in one transaction.
pub async fn clear_all(db: &Db) -> Result<()> {
	let mut tx = db.pool.begin().await?;

	sqlx::query("DELETE FROM crop_recommendations").execute(&mut *tx).await?;
	sqlx::query("DELETE FROM disease_detections").execute(&mut *tx).await?;
	sqlx::query("DELETE FROM chat_queries").execute(&mut *tx).await?;

	tx.commit().await?;

	Ok(())
}

pub async fn statistics(db: &Db) -> Result<Statistics> {
	let total_recommendations: i64 =
		sqlx::query_scalar("SELECT COUNT(*) FROM crop_recommendations")
			.fetch_one(&db.pool)
			.await?;
	let total_detections: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM disease_detections")
		.fetch_one(&db.pool)
		.await?;
	let total_chat_queries: i64 =
		sqlx::query_scalar("SELECT COUNT(*) FROM chat_queries").fetch_one(&db.pool).await?;
	let top_crop: Option<String> = sqlx::query_scalar(
		"\
SELECT recommended_crop
FROM crop_recommendations
GROUP BY recommended_crop
ORDER BY COUNT(*) DESC, recommended_crop ASC
LIMIT 1",
	)
	.fetch_optional(&db.pool)
	.await?;
	// Healthy results are not diseases; leave them out of the leaderboard.
	let top_disease: Option<String> = sqlx::query_scalar(
		"\
SELECT disease
FROM disease_detections
WHERE disease != 'Healthy'
GROUP BY disease
ORDER BY COUNT(*) DESC, disease ASC
LIMIT 1",
	)
	.fetch_optional(&db.pool)
	.await?;

	Ok(Statistics {
		total_recommendations,
		total_detections,
		total_chat_queries,
		top_crop,
		top_disease,
	})
}
