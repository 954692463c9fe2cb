//! Rule-based crop scoring, used whenever the trained classifier is
//! unavailable.

use agron_knowledge::CROP_PROFILES;

/// The seven inputs of the crop recommender, in the order the trained model
/// was fitted on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatureVector {
	pub nitrogen: f64,
	pub phosphorus: f64,
	pub potassium: f64,
	pub temperature: f64,
	pub humidity: f64,
	pub ph: f64,
	pub rainfall: f64,
}

impl FeatureVector {
	pub fn as_array(&self) -> [f64; 7] {
		[
			self.nitrogen,
			self.phosphorus,
			self.potassium,
			self.temperature,
			self.humidity,
			self.ph,
			self.rainfall,
		]
	}
}

/// Scores every known crop against `features` with hand-tuned agronomic
/// rules. The thresholds are deliberate constants carried over from field
/// calibration; do not "clean them up".
///
/// Scores are percentages in `0..=100`, one entry per crop in table order.
pub fn rule_based_scores(features: &FeatureVector) -> Vec<(&'static str, f32)> {
	let FeatureVector { nitrogen, phosphorus, potassium, temperature, ph, rainfall, humidity } =
		*features;

	CROP_PROFILES
		.iter()
		.map(|profile| {
			let mut score: f32 = 50.;

			match profile.name {
				"rice" | "jute" | "banana" => {
					if rainfall > 150. {
						score += 30.;
					}
					if humidity > 70. {
						score += 20.;
					}
				},
				"cotton" | "maize" | "mango" => {
					if rainfall > 50. && rainfall < 100. {
						score += 25.;
					}
					if temperature > 20. && temperature < 30. {
						score += 25.;
					}
				},
				"apple" | "grapes" => {
					if temperature < 25. {
						score += 30.;
					}
					if rainfall > 50. && rainfall < 125. {
						score += 20.;
					}
				},
				"chickpea" | "lentil" | "mothbeans" => {
					if rainfall < 60. {
						score += 30.;
					}
					if nitrogen < 50. {
						score += 20.;
					}
				},
				_ => {},
			}

			if ph > 6. && ph < 7.5 {
				score += 10.;
			}
			if nitrogen > 40. {
				score += 5.;
			}
			if phosphorus > 30. {
				score += 5.;
			}
			if potassium > 30. {
				score += 5.;
			}

			(profile.name, score.min(100.) as f32)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn top(scores: &[(&'static str, f32)]) -> (&'static str, f32) {
		scores.iter().copied().fold(scores[0], |best, item| if item.1 > best.1 { item } else { best })
	}

	#[test]
	fn wet_humid_fields_favor_rice() {
		let scores = rule_based_scores(&FeatureVector {
			nitrogen: 90.,
			phosphorus: 42.,
			potassium: 43.,
			temperature: 21.,
			humidity: 82.,
			ph: 6.5,
			rainfall: 203.,
		});

		assert_eq!(top(&scores).0, "rice");
	}

	#[test]
	fn dry_low_nitrogen_fields_favor_pulses() {
		let scores = rule_based_scores(&FeatureVector {
			nitrogen: 20.,
			phosphorus: 60.,
			potassium: 20.,
			temperature: 24.,
			humidity: 30.,
			ph: 7.,
			rainfall: 45.,
		});

		assert!(["chickpea", "lentil", "mothbeans"].contains(&top(&scores).0));
	}

	#[test]
	fn scores_cap_at_one_hundred() {
		let scores = rule_based_scores(&FeatureVector {
			nitrogen: 90.,
			phosphorus: 50.,
			potassium: 50.,
			temperature: 22.,
			humidity: 85.,
			ph: 6.8,
			rainfall: 250.,
		});

		assert!(scores.iter().all(|(_, score)| (0. ..=100.).contains(score)));
	}

	#[test]
	fn every_crop_is_scored_once() {
		let scores = rule_based_scores(&FeatureVector::default());

		assert_eq!(scores.len(), CROP_PROFILES.len());
	}
}
