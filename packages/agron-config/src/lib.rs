mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Chat, Config, History, LlmProviderConfig, ProviderConfig, Providers, Recommend, Service,
	Sqlite, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.path.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.sqlite.path must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.sqlite.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if !matches!(cfg.chat.mode.as_str(), "online" | "offline") {
		return Err(Error::Validation {
			message: "chat.mode must be one of online or offline.".to_string(),
		});
	}
	if cfg.chat.mode == "online" && cfg.providers.llm_chat.is_none() {
		return Err(Error::Validation {
			message: "providers.llm_chat must be configured when chat.mode is online.".to_string(),
		});
	}
	if cfg.recommend.top_n == 0 {
		return Err(Error::Validation {
			message: "recommend.top_n must be greater than zero.".to_string(),
		});
	}
	if cfg.history.default_limit == 0 {
		return Err(Error::Validation {
			message: "history.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.history.export_limit < cfg.history.default_limit {
		return Err(Error::Validation {
			message: "history.export_limit must be at least history.default_limit.".to_string(),
		});
	}

	let mut endpoints = vec![];

	if let Some(classifier) = cfg.providers.classifier.as_ref() {
		endpoints.push((
			"classifier",
			&classifier.api_base,
			&classifier.api_key,
			&classifier.model,
			classifier.timeout_ms,
		));
	}
	if let Some(vision) = cfg.providers.vision.as_ref() {
		endpoints.push((
			"vision",
			&vision.api_base,
			&vision.api_key,
			&vision.model,
			vision.timeout_ms,
		));
	}
	if let Some(llm_chat) = cfg.providers.llm_chat.as_ref() {
		endpoints.push((
			"llm_chat",
			&llm_chat.api_base,
			&llm_chat.api_key,
			&llm_chat.model,
			llm_chat.timeout_ms,
		));
	}

	for (label, api_base, api_key, model, timeout_ms) in endpoints {
		if api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_base must be non-empty."),
			});
		}
		if api_key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
		if model.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} model must be non-empty."),
			});
		}
		if timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("Provider {label} timeout_ms must be greater than zero."),
			});
		}
	}

	Ok(())
}

// A provider table left in the file with a blanked api_base counts as absent.
fn normalize(cfg: &mut Config) {
	if cfg
		.providers
		.classifier
		.as_ref()
		.map(|provider| provider.api_base.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.providers.classifier = None;
	}
	if cfg
		.providers
		.vision
		.as_ref()
		.map(|provider| provider.api_base.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.providers.vision = None;
	}
	if cfg
		.providers
		.llm_chat
		.as_ref()
		.map(|provider| provider.api_base.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.providers.llm_chat = None;
	}
}
