//! HTTP clients for the remote model endpoints.

pub mod chat;
pub mod classifier;
pub mod vision;

use color_eyre::{Result, eyre};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName};
use serde_json::{Map, Value};

/// One class with its model-assigned probability, as returned by the
/// classifier and vision endpoints.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LabelScore {
	pub label: String,
	pub score: f32,
}

pub fn auth_headers(api_key: &str, default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();
	headers.insert(AUTHORIZATION, format!("Bearer {api_key}").parse()?);
	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(eyre::eyre!("Default header values must be strings."));
		};
		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}
	Ok(headers)
}

/// Accepts both response shapes the serving stacks produce: parallel
/// `labels`/`probabilities` arrays, or a `predictions` array of objects.
pub(crate) fn parse_label_scores(json: &Value) -> Result<Vec<LabelScore>> {
	if let (Some(labels), Some(probabilities)) = (
		json.get("labels").and_then(Value::as_array),
		json.get("probabilities").and_then(Value::as_array),
	) {
		if labels.len() != probabilities.len() {
			return Err(eyre::eyre!("Labels and probabilities must have the same length."));
		}

		return labels
			.iter()
			.zip(probabilities)
			.map(|(label, probability)| {
				let label = label
					.as_str()
					.ok_or_else(|| eyre::eyre!("Labels must be strings."))?
					.to_string();
				let score = probability
					.as_f64()
					.ok_or_else(|| eyre::eyre!("Probabilities must be numbers."))?
					as f32;

				Ok(LabelScore { label, score })
			})
			.collect();
	}

	if let Some(predictions) = json.get("predictions").and_then(Value::as_array) {
		return predictions
			.iter()
			.map(|prediction| {
				let label = prediction
					.get("label")
					.and_then(Value::as_str)
					.ok_or_else(|| eyre::eyre!("Predictions must carry a label."))?
					.to_string();
				let score = prediction
					.get("probability")
					.or_else(|| prediction.get("score"))
					.and_then(Value::as_f64)
					.ok_or_else(|| eyre::eyre!("Predictions must carry a probability."))?
					as f32;

				Ok(LabelScore { label, score })
			})
			.collect();
	}

	Err(eyre::eyre!("Response carries neither labels nor predictions."))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_parallel_arrays() {
		let json = serde_json::json!({
			"labels": ["rice", "maize"],
			"probabilities": [0.7, 0.3],
		});
		let scores = parse_label_scores(&json).expect("parse failed");

		assert_eq!(scores.len(), 2);
		assert_eq!(scores[0].label, "rice");
		assert!((scores[0].score - 0.7).abs() < 1e-6);
	}

	#[test]
	fn parses_prediction_objects() {
		let json = serde_json::json!({
			"predictions": [
				{ "label": "Apple Scab", "probability": 0.9 },
				{ "label": "Healthy", "score": 0.1 },
			],
		});
		let scores = parse_label_scores(&json).expect("parse failed");

		assert_eq!(scores[0].label, "Apple Scab");
		assert_eq!(scores[1].label, "Healthy");
	}

	#[test]
	fn rejects_mismatched_arrays() {
		let json = serde_json::json!({
			"labels": ["rice"],
			"probabilities": [0.7, 0.3],
		});

		assert!(parse_label_scores(&json).is_err());
	}
}
