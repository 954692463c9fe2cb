//! The application service layer. Each operation validates its request,
//! consults a remote model when one is configured, falls back to the built-in
//! rules otherwise, and appends an interaction record.

pub mod chat;
pub mod detect;
pub mod history;
pub mod recommend;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use agron_config::{Config, LlmProviderConfig, ProviderConfig};
use agron_providers::{LabelScore, chat as chat_provider, classifier, vision};
use agron_storage::db::Db;
pub use chat::{ChatRequest, ChatResponse};
pub use detect::{DetectRequest, DetectResponse, DiseaseScore};
pub use history::{HistoryKind, HistoryList};
pub use recommend::{CropScore, RecommendRequest, RecommendResponse};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait ClassifierProvider
where
	Self: Send + Sync,
{
	fn predict<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		features: &'a [f64],
	) -> BoxFuture<'a, color_eyre::Result<Vec<LabelScore>>>;
}

pub trait VisionProvider
where
	Self: Send + Sync,
{
	fn classify<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		tensor: &'a [f32],
	) -> BoxFuture<'a, color_eyre::Result<Vec<LabelScore>>>;
}

pub trait ChatProvider
where
	Self: Send + Sync,
{
	fn send<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String, fields: Vec<String> },
	Provider { message: String },
	Storage { message: String },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message, .. } => write!(f, "Invalid request: {message}"),
			Self::Provider { message } => write!(f, "Provider error: {message}"),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<agron_storage::Error> for ServiceError {
	fn from(err: agron_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<color_eyre::Report> for ServiceError {
	fn from(err: color_eyre::Report) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

impl ServiceError {
	pub(crate) fn invalid(message: impl Into<String>, fields: &[&str]) -> Self {
		Self::InvalidRequest {
			message: message.into(),
			fields: fields.iter().map(|field| field.to_string()).collect(),
		}
	}
}

/// How chat replies are produced. Resolved once at startup from the config
/// flag rather than rediscovered per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatMode {
	Online,
	Offline,
}
impl ChatMode {
	pub fn from_config(cfg: &Config) -> Self {
		if cfg.chat.mode == "online" && cfg.providers.llm_chat.is_some() {
			Self::Online
		} else {
			Self::Offline
		}
	}
}

#[derive(Clone)]
pub struct Providers {
	pub classifier: Arc<dyn ClassifierProvider>,
	pub vision: Arc<dyn VisionProvider>,
	pub chat: Arc<dyn ChatProvider>,
}

struct DefaultProviders;

impl ClassifierProvider for DefaultProviders {
	fn predict<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		features: &'a [f64],
	) -> BoxFuture<'a, color_eyre::Result<Vec<LabelScore>>> {
		Box::pin(classifier::predict(cfg, features))
	}
}

impl VisionProvider for DefaultProviders {
	fn classify<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		tensor: &'a [f32],
	) -> BoxFuture<'a, color_eyre::Result<Vec<LabelScore>>> {
		Box::pin(vision::classify(cfg, tensor))
	}
}

impl ChatProvider for DefaultProviders {
	fn send<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(chat_provider::send(cfg, messages))
	}
}

impl Providers {
	pub fn new(
		classifier: Arc<dyn ClassifierProvider>,
		vision: Arc<dyn VisionProvider>,
		chat: Arc<dyn ChatProvider>,
	) -> Self {
		Self { classifier, vision, chat }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { classifier: provider.clone(), vision: provider.clone(), chat: provider }
	}
}

pub struct AgronService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
	pub mode: ChatMode,
}

impl AgronService {
	pub fn new(cfg: Config, db: Db) -> Self {
		let mode = ChatMode::from_config(&cfg);

		Self { cfg, db, providers: Providers::default(), mode }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		let mode = ChatMode::from_config(&cfg);

		Self { cfg, db, providers, mode }
	}
}
