use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub providers: Providers,
	#[serde(default)]
	pub chat: Chat,
	#[serde(default)]
	pub recommend: Recommend,
	#[serde(default)]
	pub history: History,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub sqlite: Sqlite,
}

#[derive(Debug, Deserialize)]
pub struct Sqlite {
	pub path: String,
	pub pool_max_conns: u32,
}

/// Remote model endpoints. Every provider is optional; a missing entry means
/// the corresponding feature runs on its built-in fallback.
#[derive(Debug, Default, Deserialize)]
pub struct Providers {
	pub classifier: Option<ProviderConfig>,
	pub vision: Option<ProviderConfig>,
	pub llm_chat: Option<LlmProviderConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Chat {
	pub mode: String,
}
impl Default for Chat {
	fn default() -> Self {
		Self { mode: "offline".to_string() }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Recommend {
	pub top_n: usize,
}
impl Default for Recommend {
	fn default() -> Self {
		Self { top_n: 3 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct History {
	pub default_limit: u32,
	pub export_limit: u32,
}
impl Default for History {
	fn default() -> Self {
		Self { default_limit: 50, export_limit: 1_000 }
	}
}
