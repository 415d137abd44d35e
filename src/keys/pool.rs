// Credential pool - round-robin rotation over API keys

use super::error::KeyError;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// An opaque API credential
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form safe to show on screen
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Pool handle shared between the composition root and the oracle
pub type SharedPool = Arc<Mutex<CredentialPool>>;

/// Ordered credentials plus a rotation cursor
#[derive(Debug, Default)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
    cursor: usize,
}

impl CredentialPool {
    pub fn new<I, S>(credentials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::default();
        pool.configure(credentials);
        pool
    }

    pub fn shared(self) -> SharedPool {
        Arc::new(Mutex::new(self))
    }

    /// Replace the whole set; entries are trimmed and blanks dropped
    pub fn configure<I, S>(&mut self, credentials: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.credentials = credentials
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .map(Credential)
            .collect();
        self.cursor = 0;

        info!(count = self.credentials.len(), "credential pool configured");
    }

    /// Credential at the cursor; advances the cursor with wrap-around
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Credential, KeyError> {
        if self.credentials.is_empty() {
            return Err(KeyError::Unconfigured);
        }

        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.credentials.len();

        debug!(index = index, pool_size = self.credentials.len(), "credential selected");
        Ok(self.credentials[index].clone())
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pool: &CredentialPool) -> Vec<&str> {
        pool.credentials().iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn test_rotation_wraps() {
        let mut pool = CredentialPool::new(["k1", "k2", "k3"]);

        let first = pool.next().unwrap();
        assert_eq!(pool.next().unwrap().as_str(), "k2");
        assert_eq!(pool.next().unwrap().as_str(), "k3");
        let fourth = pool.next().unwrap();

        assert_eq!(first, fourth);
        assert_eq!(first.as_str(), "k1");
    }

    #[test]
    fn test_single_key_always_returned() {
        let mut pool = CredentialPool::new(["only"]);
        for _ in 0..5 {
            assert_eq!(pool.next().unwrap().as_str(), "only");
        }
    }

    #[test]
    fn test_empty_pool_unconfigured() {
        let mut pool = CredentialPool::default();
        pool.configure(Vec::<String>::new());
        assert!(matches!(pool.next(), Err(KeyError::Unconfigured)));
    }

    #[test]
    fn test_configure_trims_and_drops_blanks() {
        let pool = CredentialPool::new([" a ", "", "b", "   "]);
        assert_eq!(keys(&pool), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let pool = CredentialPool::new(["x", "y", "x"]);
        assert_eq!(keys(&pool), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_reconfigure_resets_cursor() {
        let mut pool = CredentialPool::new(["a", "b"]);
        pool.next().unwrap();

        pool.configure(["c", "d"]);
        assert_eq!(pool.next().unwrap().as_str(), "c");
    }

    #[test]
    fn test_reconfigure_to_empty() {
        let mut pool = CredentialPool::new(["a"]);
        pool.configure([" "]);
        assert!(pool.is_empty());
        assert!(pool.next().is_err());
    }

    #[test]
    fn test_debug_redacts() {
        let credential = Credential("secret-token-value".to_string());
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("secret"));
        assert_eq!(credential.masked(), "secr...alue");
    }
}
