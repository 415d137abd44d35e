// Oracle faults

use crate::keys::KeyError;
use thiserror::Error;

/// Markers in a transport error message that mean "slow down"
const RATE_LIMIT_MARKERS: [&str; 2] = ["429", "RESOURCE_EXHAUSTED"];

/// Failures surfaced to the caller of an oracle operation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Fault {
    /// No credential available; no call was attempted
    #[error("No API key configured")]
    Unconfigured,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model call failed: {0}")]
    Transient(String),
}

impl From<KeyError> for Fault {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::Unconfigured => Fault::Unconfigured,
        }
    }
}

/// Map a transport failure message to a fault.
///
/// This is the only place that inspects message text; swap the rule here if
/// the transport ever exposes a structured code.
pub fn classify_failure(message: &str) -> Fault {
    if RATE_LIMIT_MARKERS.iter().any(|m| message.contains(m)) {
        Fault::RateLimited(message.to_string())
    } else {
        Fault::Transient(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_429_is_rate_limited() {
        let fault = classify_failure("API error (HTTP 429 Too Many Requests): slow down");
        assert!(matches!(fault, Fault::RateLimited(_)));
    }

    #[test]
    fn test_resource_exhausted_is_rate_limited() {
        let fault = classify_failure("quota: RESOURCE_EXHAUSTED");
        assert!(matches!(fault, Fault::RateLimited(_)));
    }

    #[test]
    fn test_other_failures_are_transient() {
        assert_eq!(
            classify_failure("Network error: connection refused"),
            Fault::Transient("Network error: connection refused".to_string())
        );
        assert!(matches!(
            classify_failure("API error (HTTP 503 UNAVAILABLE): overloaded"),
            Fault::Transient(_)
        ));
    }

    #[test]
    fn test_unconfigured_from_key_error() {
        assert_eq!(Fault::from(KeyError::Unconfigured), Fault::Unconfigured);
    }
}
