use std::time::Duration;

use color_eyre::Result;
use reqwest::Client;
use serde_json::Value;

use crate::LabelScore;

/// Sends a preprocessed CHW tensor to the leaf disease endpoint and returns
/// its per-class probabilities.
pub async fn classify(
	cfg: &agron_config::ProviderConfig,
	tensor: &[f32],
) -> Result<Vec<LabelScore>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"shape": [1, 3, 224, 224],
		"data": tensor,
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
