use base64::Engine;

use agron_domain::{RgbImage, format_class_name, heuristic_scores, load_leaf_image, preprocess};
use agron_knowledge::{PesticideDetails, disease_profile, pesticide_details};
use agron_storage::{models::NewDiseaseDetection, queries};

use crate::{AgronService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DetectRequest {
	pub file_name: String,
	pub image_base64: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DiseaseScore {
	pub disease: String,
	pub confidence: f32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DetectResponse {
	pub disease: String,
	pub confidence: f32,
	pub description: String,
	pub pesticide: String,
	pub pesticide_details: Option<PesticideDetails>,
	pub all_scores: Vec<DiseaseScore>,
	pub source: String,
}

impl AgronService {
	pub async fn detect(&self, req: DetectRequest) -> ServiceResult<DetectResponse> {
		let bytes = base64::engine::general_purpose::STANDARD
			.decode(req.image_base64.trim())
			.map_err(|_| {
				ServiceError::invalid("image_base64 must be valid base64.", &["image_base64"])
			})?;
		let image = load_leaf_image(&bytes).map_err(|_| {
			ServiceError::invalid("image_base64 is not a decodable image.", &["image_base64"])
		})?;
		let file_name = match req.file_name.trim() {
			"" => "upload",
			name => name,
		};
		let (mut scores, source) = match self.vision_model_scores(&image).await {
			Some(scores) => (scores, "model"),
			None => {
				let scores = heuristic_scores(&image)
					.into_iter()
					.map(|(disease, score)| (disease.to_string(), score))
					.collect::<Vec<_>>();

				(scores, "heuristic")
			},
		};

		scores.sort_by(|a, b| b.1.total_cmp(&a.1));

		let (disease, confidence) = scores.first().cloned().ok_or_else(|| {
			ServiceError::Provider { message: "Vision model returned no classes.".to_string() }
		})?;
		let profile = disease_profile(&disease);
		let description = profile
			.map(|profile| profile.description.to_string())
			.unwrap_or_else(|| "No description available for this condition.".to_string());
		let pesticide = profile.map(|profile| profile.pesticide).unwrap_or("None").to_string();
		let record = NewDiseaseDetection {
			file_name,
			disease: &disease,
			confidence: confidence as f64,
			pesticide: &pesticide,
			source,
		};

		if let Err(err) = queries::insert_disease_detection(&self.db, &record).await {
			tracing::warn!("Failed to record disease detection: {err}.");
		}

		Ok(DetectResponse {
			pesticide_details: pesticide_details(&pesticide).copied(),
			all_scores: scores
				.into_iter()
				.map(|(disease, confidence)| DiseaseScore { disease, confidence })
				.collect(),
			disease,
			confidence,
			description,
			pesticide,
			source: source.to_string(),
		})
	}

	/// `None` routes the request to the color heuristic.
	async fn vision_model_scores(&self, image: &RgbImage) -> Option<Vec<(String, f32)>> {
		let cfg = self.cfg.providers.vision.as_ref()?;
		let tensor = preprocess(image);
		let scores = match self.providers.vision.classify(cfg, &tensor).await {
			Ok(scores) => scores,
			Err(err) => {
				tracing::warn!("Vision model unavailable, using color heuristic: {err}.");

				return None;
			},
		};

		if scores.is_empty() {
			tracing::warn!("Vision model returned no scores, using color heuristic.");

			return None;
		}

		Some(
			scores
				.into_iter()
				.map(|score| (format_class_name(&score.label), (score.score * 100.).min(100.)))
				.collect(),
		)
	}
}
