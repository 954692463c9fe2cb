use time::OffsetDateTime;

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct CropRecommendationRow {
	pub id: i64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	pub nitrogen: f64,
	pub phosphorus: f64,
	pub potassium: f64,
	pub temperature: f64,
	pub humidity: f64,
	pub ph: f64,
	pub rainfall: f64,
	pub recommended_crop: String,
	pub confidence: f64,
	pub source: String,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct DiseaseDetectionRow {
	pub id: i64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	pub file_name: String,
	pub disease: String,
	pub confidence: f64,
	pub pesticide: String,
	pub source: String,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct ChatQueryRow {
	pub id: i64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	pub question: String,
	pub answer: String,
	pub chatbot_type: String,
}

/// Insert payload for `crop_recommendations`; `id` and `created_at` are
/// assigned on write.
#[derive(Debug)]
pub struct NewCropRecommendation<'a> {
	pub nitrogen: f64,
	pub phosphorus: f64,
	pub potassium: f64,
	pub temperature: f64,
	pub humidity: f64,
	pub ph: f64,
	pub rainfall: f64,
	pub recommended_crop: &'a str,
	pub confidence: f64,
	pub source: &'a str,
}

#[derive(Debug)]
pub struct NewDiseaseDetection<'a> {
	pub file_name: &'a str,
	pub disease: &'a str,
	pub confidence: f64,
	pub pesticide: &'a str,
	pub source: &'a str,
}

#[derive(Debug)]
pub struct NewChatQuery<'a> {
	pub question: &'a str,
	pub answer: &'a str,
	pub chatbot_type: &'a str,
}

/// Aggregates over the whole history, served by the statistics endpoint.
#[derive(Debug, serde::Serialize)]
pub struct Statistics {
	pub total_recommendations: i64,
	pub total_detections: i64,
	pub total_chat_queries: i64,
	pub top_crop: Option<String>,
	pub top_disease: Option<String>,
}
