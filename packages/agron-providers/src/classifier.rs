use std::time::Duration;

use color_eyre::Result;
use reqwest::Client;
use serde_json::Value;

use crate::LabelScore;

/// Asks the crop classifier endpoint to score every crop for one feature
/// vector in `[n, p, k, temperature, humidity, ph, rainfall]` order.
pub async fn predict(
	cfg: &agron_config::ProviderConfig,
	features: &[f64],
) -> Result<Vec<LabelScore>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"features": features,
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	crate::parse_label_scores(&json)
}
