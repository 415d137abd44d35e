// Parse module - extract structured payloads from model replies

use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use tracing::debug;

/// A fence spanning the whole reply, with an optional language tag
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// Strip surrounding whitespace and a whole-reply code fence
pub fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match FENCE.captures(trimmed).and_then(|c| c.get(2)) {
        Some(inner) if !inner.as_str().is_empty() => inner.as_str().trim(),
        _ => trimmed,
    }
}

/// Parse a model reply into `T`; `None` when the reply does not fit
pub fn parse_reply<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let payload = strip_fence(raw);

    match serde_json::from_str::<T>(payload) {
        Ok(value) => {
            debug!(bytes = payload.len(), "reply parsed");
            Some(value)
        }
        Err(e) => {
            let preview: String = raw.chars().take(200).collect();
            debug!(error = %e, raw = %preview, "reply not parseable");
            None
        }
    }
}
