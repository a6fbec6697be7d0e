use crate::config::database::DatabaseConfig;
use crate::config::loader::read_json;
use crate::config::server::MainConfig;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Everything read from disk at startup.
///
/// Built once by the binary and handed to whatever needs it. Loads take
/// `&mut self`, so no reader can observe a half-finished startup.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    pub main: MainConfig,
    pub database: DatabaseConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both files in order, stopping at the first failure.
    pub fn load(main_path: impl AsRef<Path>, database_path: impl AsRef<Path>) -> Result<Self> {
        let mut settings = Self::new();
        settings.load_main_config(main_path)?;
        settings.load_database_config(database_path)?;
        Ok(settings)
    }

    /// Replace the main config with the contents of `path`.
    ///
    /// On error the current value is kept.
    pub fn load_main_config(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.main = read_json(path)?;
        Ok(())
    }

    /// Replace the database config with the contents of `path`.
    ///
    /// On error the current value is kept.
    pub fn load_database_config(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.database = read_json(path)?;
        Ok(())
    }

    pub fn port(&self) -> i64 {
        self.main.port
    }
}
