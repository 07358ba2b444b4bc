/// Error type for calls across the extension bridge
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtensionError {
    #[error("Browser API call failed: {0}")]
    Bridge(String),

    #[error("Failed to decode host value: {0}")]
    Decode(String),

    #[error("Failed to encode host value: {0}")]
    Encode(String),
}

pub type Result<T, E = ExtensionError> = std::result::Result<T, E>;
