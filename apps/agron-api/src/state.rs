use std::sync::Arc;

use agron_service::AgronService;
use agron_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AgronService>,
}
impl AppState {
	pub async fn new(config: agron_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.sqlite).await?;

		db.ensure_schema().await?;

		let service = AgronService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
