// Game configuration

use std::path::PathBuf;
use tracing::warn;

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Directory holding the save and settings files
    pub data_dir: PathBuf,
    /// Event log bound; 0 means unbounded
    pub log_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::home_dir()
                .map(|p| p.join(".soulring"))
                .unwrap_or_else(|| PathBuf::from(".soulring")),
            log_capacity: 500,
        }
    }
}

impl GameConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = GameConfig::default();

        if let Ok(dir) = std::env::var("SOULRING_DATA_DIR")
            && !dir.trim().is_empty()
        {
            config.data_dir = PathBuf::from(dir);
        }
        config.log_capacity = parse_env_var("SOULRING_LOG_CAPACITY", config.log_capacity);

        config
    }

    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join("save.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.toml")
    }

    pub fn log_capacity(&self) -> Option<usize> {
        (self.log_capacity > 0).then_some(self.log_capacity)
    }
}
