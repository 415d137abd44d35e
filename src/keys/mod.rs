// Keys module - API credential pool and its configuration

pub mod error;
pub mod pool;

pub use error::KeyError;
pub use pool::{Credential, CredentialPool, SharedPool};

/// Key configuration
#[derive(Debug, Clone, Default)]
pub struct KeyConfig {
    /// Raw keys in rotation order, before trimming
    pub api_keys: Vec<String>,
}

impl KeyConfig {
    /// Load from `GEMINI_API_KEYS` (comma-separated)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_keys = std::env::var("GEMINI_API_KEYS")
            .map(|v| split_keys(&v))
            .unwrap_or_default();

        Self { api_keys }
    }
}

/// Split a comma- or newline-separated key list
pub fn split_keys(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
