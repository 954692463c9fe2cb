use serde_json::Value;

use agron_domain::{FeatureVector, rule_based_scores};
use agron_knowledge::crop_profile;
use agron_storage::{models::NewCropRecommendation, queries};

use crate::{AgronService, ServiceError, ServiceResult};

const NO_CROP_INFO: &str = "No information available for this crop.";

/// Raw request fields. Values arrive as JSON numbers or numeric strings;
/// coercion and defaulting happen in [`RecommendRequest::into_features`].
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RecommendRequest {
	#[serde(default, alias = "n", alias = "N")]
	pub nitrogen: Option<Value>,
	#[serde(default, alias = "p", alias = "P")]
	pub phosphorus: Option<Value>,
	#[serde(default, alias = "k", alias = "K")]
	pub potassium: Option<Value>,
	#[serde(default, alias = "temp")]
	pub temperature: Option<Value>,
	#[serde(default)]
	pub humidity: Option<Value>,
	#[serde(default)]
	pub ph: Option<Value>,
	#[serde(default)]
	pub rainfall: Option<Value>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CropScore {
	pub crop: String,
	pub confidence: f32,
	pub info: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RecommendResponse {
	pub recommendations: Vec<CropScore>,
	pub source: String,
}

impl RecommendRequest {
	/// Missing fields default to zero, except pH which defaults to neutral.
	pub fn into_features(self) -> ServiceResult<FeatureVector> {
		let mut invalid = vec![];
		let mut field = |name: &'static str, value: Option<Value>, default: f64| match coerce(
			value, default,
		) {
			Some(number) => number,
			None => {
				invalid.push(name);

				default
			},
		};
		let features = FeatureVector {
			nitrogen: field("nitrogen", self.nitrogen, 0.),
			phosphorus: field("phosphorus", self.phosphorus, 0.),
			potassium: field("potassium", self.potassium, 0.),
			temperature: field("temperature", self.temperature, 0.),
			humidity: field("humidity", self.humidity, 0.),
			ph: field("ph", self.ph, 7.),
			rainfall: field("rainfall", self.rainfall, 0.),
		};

		if !invalid.is_empty() {
			return Err(ServiceError::invalid(
				"Soil and climate values must be numbers.",
				&invalid,
			));
		}

		Ok(features)
	}
}

fn coerce(value: Option<Value>, default: f64) -> Option<f64> {
	match value {
		None | Some(Value::Null) => Some(default),
		Some(Value::Number(number)) => number.as_f64(),
		Some(Value::String(raw)) => {
			let trimmed = raw.trim();

			if trimmed.is_empty() { Some(default) } else { trimmed.parse().ok() }
		},
		Some(_) => None,
	}
}

impl AgronService {
	pub async fn recommend(&self, req: RecommendRequest) -> ServiceResult<RecommendResponse> {
		let features = req.into_features()?;
		let (mut scores, source) = match self.model_scores(&features).await {
			Some(scores) => (scores, "model"),
			None => {
				let scores = rule_based_scores(&features)
					.into_iter()
					.map(|(crop, score)| (crop.to_string(), score))
					.collect();

				(scores, "rules")
			},
		};

		// Stable sort keeps the table order as the tie-break.
		scores.sort_by(|a, b| b.1.total_cmp(&a.1));
		scores.truncate(self.cfg.recommend.top_n);

		let recommendations = scores
			.into_iter()
			.map(|(crop, confidence)| {
				let info = crop_profile(&crop)
					.map(|profile| profile.info.to_string())
					.unwrap_or_else(|| NO_CROP_INFO.to_string());

				CropScore { crop, confidence, info }
			})
			.collect::<Vec<_>>();

		if let Some(top) = recommendations.first() {
			let record = NewCropRecommendation {
				nitrogen: features.nitrogen,
				phosphorus: features.phosphorus,
				potassium: features.potassium,
				temperature: features.temperature,
				humidity: features.humidity,
				ph: features.ph,
				rainfall: features.rainfall,
				recommended_crop: &top.crop,
				confidence: top.confidence as f64,
				source,
			};

			// History is best-effort; a full disk must not fail the request.
			if let Err(err) = queries::insert_crop_recommendation(&self.db, &record).await {
				tracing::warn!("Failed to record crop recommendation: {err}.");
			}
		}

		Ok(RecommendResponse { recommendations, source: source.to_string() })
	}

	/// Returns `None` when no classifier is configured or the call fails, in
	/// which case the caller switches to the rule-based scorer.
	async fn model_scores(&self, features: &FeatureVector) -> Option<Vec<(String, f32)>> {
		let cfg = self.cfg.providers.classifier.as_ref()?;
		let scores = match self.providers.classifier.predict(cfg, &features.as_array()).await {
			Ok(scores) => scores,
			Err(err) => {
				tracing::warn!("Crop classifier unavailable, using rule-based scoring: {err}.");

				return None;
			},
		};

		if scores.is_empty() {
			tracing::warn!("Crop classifier returned no scores, using rule-based scoring.");

			return None;
		}

		// A miscalibrated model must not push confidence past 100.
		Some(scores.into_iter().map(|score| (score.label, (score.score * 100.).min(100.))).collect())
	}
}
