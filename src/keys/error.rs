// Credential pool errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("No API key configured")]
    Unconfigured,
}
