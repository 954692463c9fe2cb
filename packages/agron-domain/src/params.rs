//! Extraction of soil and weather numbers from chat messages.

use std::sync::LazyLock;

use regex::Regex;

use crate::scoring::FeatureVector;

macro_rules! param_regex {
	($name:ident, $pattern:literal) => {
		static $name: LazyLock<Regex> =
			LazyLock::new(|| Regex::new($pattern).expect("hard-coded pattern"));
	};
}

param_regex!(NITROGEN, r"(?i)\b(?:nitrogen|n)\s*[=:]?\s*(\d+(?:\.\d+)?)");
param_regex!(PHOSPHORUS, r"(?i)\b(?:phosphorus|p)\s*[=:]?\s*(\d+(?:\.\d+)?)");
param_regex!(POTASSIUM, r"(?i)\b(?:potassium|k)\s*[=:]?\s*(\d+(?:\.\d+)?)");
param_regex!(TEMPERATURE, r"(?i)\b(?:temperature|temp)\s*[=:]?\s*(\d+(?:\.\d+)?)");
param_regex!(HUMIDITY, r"(?i)\bhumidity\s*[=:]?\s*(\d+(?:\.\d+)?)");
param_regex!(PH, r"(?i)\bph\s*[=:]?\s*(\d+(?:\.\d+)?)");
param_regex!(RAINFALL, r"(?i)\b(?:rainfall|rain)\s*[=:]?\s*(\d+(?:\.\d+)?)");

/// Numbers pulled out of a free-text message. A `None` field simply was not
/// mentioned.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtractedParams {
	pub nitrogen: Option<f64>,
	pub phosphorus: Option<f64>,
	pub potassium: Option<f64>,
	pub temperature: Option<f64>,
	pub humidity: Option<f64>,
	pub ph: Option<f64>,
	pub rainfall: Option<f64>,
}

impl ExtractedParams {
	pub fn parse(text: &str) -> Self {
		Self {
			nitrogen: capture(&NITROGEN, text),
			phosphorus: capture(&PHOSPHORUS, text),
			potassium: capture(&POTASSIUM, text),
			temperature: capture(&TEMPERATURE, text),
			humidity: capture(&HUMIDITY, text),
			ph: capture(&PH, text),
			rainfall: capture(&RAINFALL, text),
		}
	}

	/// How many of the seven fields the message actually provided.
	pub fn provided(&self) -> usize {
		[
			self.nitrogen,
			self.phosphorus,
			self.potassium,
			self.temperature,
			self.humidity,
			self.ph,
			self.rainfall,
		]
		.iter()
		.filter(|field| field.is_some())
		.count()
	}

	/// Fills unmentioned fields with mid-range defaults so a partial message
	/// can still drive a recommendation.
	pub fn with_chat_defaults(&self) -> FeatureVector {
		FeatureVector {
			nitrogen: self.nitrogen.unwrap_or(50.),
			phosphorus: self.phosphorus.unwrap_or(50.),
			potassium: self.potassium.unwrap_or(50.),
			temperature: self.temperature.unwrap_or(25.),
			humidity: self.humidity.unwrap_or(65.),
			ph: self.ph.unwrap_or(6.5),
			rainfall: self.rainfall.unwrap_or(100.),
		}
	}
}

fn capture(regex: &Regex, text: &str) -> Option<f64> {
	regex.captures(text).and_then(|caps| caps.get(1)).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_compact_form() {
		let params = ExtractedParams::parse("N=90, P=42, K=43, temp 21, humidity 82");

		assert_eq!(params.nitrogen, Some(90.));
		assert_eq!(params.phosphorus, Some(42.));
		assert_eq!(params.potassium, Some(43.));
		assert_eq!(params.temperature, Some(21.));
		assert_eq!(params.humidity, Some(82.));
		assert_eq!(params.provided(), 5);
	}

	#[test]
	fn parses_spelled_out_form() {
		let params =
			ExtractedParams::parse("nitrogen 40 phosphorus 60 ph: 6.8 rainfall 120.5");

		assert_eq!(params.nitrogen, Some(40.));
		assert_eq!(params.phosphorus, Some(60.));
		assert_eq!(params.ph, Some(6.8));
		assert_eq!(params.rainfall, Some(120.5));
	}

	#[test]
	fn ignores_messages_without_numbers() {
		let params = ExtractedParams::parse("what should I grow this season?");

		assert_eq!(params, ExtractedParams::default());
		assert_eq!(params.provided(), 0);
	}

	#[test]
	fn chat_defaults_fill_the_gaps() {
		let vector = ExtractedParams::parse("rainfall 200").with_chat_defaults();

		assert_eq!(vector.rainfall, 200.);
		assert_eq!(vector.ph, 6.5);
		assert_eq!(vector.humidity, 65.);
	}
}
