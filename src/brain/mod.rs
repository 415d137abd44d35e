// Brain module - remote model client (Gemini generateContent)

pub mod builder;
pub mod client;
pub mod error;
pub mod types;

pub use builder::RequestBuilder;
pub use client::Brain;
pub use error::{BrainError, BrainInitError};
pub use types::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part, Role};

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Brain configuration
#[derive(Debug, Clone)]
pub struct BrainConfig {
    /// API base URL
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Transport timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum output tokens per reply
    pub max_output_tokens: u32,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: 60,
            max_output_tokens: 1024,
        }
    }
}

impl BrainConfig {
    pub fn from_env() -> Result<Self, BrainInitError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let endpoint = std::env::var("GEMINI_ENDPOINT").unwrap_or(defaults.endpoint);
        let model = std::env::var("GEMINI_MODEL").unwrap_or(defaults.model);

        if endpoint.trim().is_empty() {
            return Err(BrainInitError::ConfigInvalid("GEMINI_ENDPOINT is empty".into()));
        }
        if model.trim().is_empty() {
            return Err(BrainInitError::ConfigInvalid("GEMINI_MODEL is empty".into()));
        }

        let request_timeout_secs =
            parse_env_var("GEMINI_TIMEOUT_SECS", defaults.request_timeout_secs);
        let max_output_tokens = parse_env_var("GEMINI_MAX_TOKENS", defaults.max_output_tokens);

        Ok(Self {
            endpoint,
            model,
            request_timeout_secs,
            max_output_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_var_falls_back_on_invalid() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("SOULRING_TEST_TIMEOUT_BAD", "sixty");
            std::env::set_var("SOULRING_TEST_TIMEOUT_OK", "15");
        }

        assert_eq!(parse_env_var("SOULRING_TEST_TIMEOUT_BAD", 60u64), 60);
        assert_eq!(parse_env_var("SOULRING_TEST_TIMEOUT_OK", 60u64), 15);
        assert_eq!(parse_env_var("SOULRING_TEST_TIMEOUT_UNSET", 1024u32), 1024);
    }
}
