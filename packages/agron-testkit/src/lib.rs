//! Shared helpers for integration tests.

mod error;

pub use error::{Error, Result};

use tempfile::TempDir;

/// A throwaway SQLite database backed by a temp directory. The file and its
/// directory are removed when the value drops.
pub struct TestDatabase {
	_dir: TempDir,
	path: String,
}
impl TestDatabase {
	pub fn new() -> Result<Self> {
		let dir = tempfile::tempdir()?;
		let path = dir
			.path()
			.join("agron_test.sqlite")
			.to_str()
			.ok_or_else(|| Error::Message("Temp path is not valid UTF-8.".to_string()))?
			.to_string();

		Ok(Self { _dir: dir, path })
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn sqlite_config(&self, pool_max_conns: u32) -> agron_config::Sqlite {
		agron_config::Sqlite { path: self.path.clone(), pool_max_conns }
	}
}
