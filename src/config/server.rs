use serde::{Deserialize, Serialize};

/// Main server configuration, read from `{"port": <integer>}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct MainConfig {
    /// Port the game server listens on. Absent key leaves it at 0.
    /// Any integer is accepted; range checks belong to whoever binds it.
    #[serde(default)]
    pub port: i64,
}
