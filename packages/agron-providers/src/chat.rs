use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

/// Runs one chat completion and returns the assistant's reply text.
pub async fn send(cfg: &agron_config::LlmProviderConfig, messages: &[Value]) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": messages,
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_reply(&json)
}

fn parse_reply(json: &Value) -> Result<String> {
	json.get("choices")
		.and_then(Value::as_array)
		.and_then(|choices| choices.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|message| message.get("content"))
		.and_then(Value::as_str)
		.map(|content| content.trim().to_string())
		.filter(|content| !content.is_empty())
		.ok_or_else(|| eyre::eyre!("Chat response is missing message content."))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_choice_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": " Rotate your crops yearly. " } }
			]
		});

		assert_eq!(parse_reply(&json).expect("parse failed"), "Rotate your crops yearly.");
	}

	#[test]
	fn rejects_empty_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "" } }
			]
		});

		assert!(parse_reply(&json).is_err());
	}
}
