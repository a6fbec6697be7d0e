pub mod config {
    pub mod database;
    pub mod loader;
    pub mod server;
    pub mod settings;
}
pub mod cli;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use config::database::DatabaseConfig;
pub use config::loader::read_json;
pub use config::server::MainConfig;
pub use config::settings::Settings;
pub use error::{ConfigError, Result};
