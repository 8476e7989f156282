//! Error types

use thiserror::Error;

/// Price feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Feed returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid feed document: {0}")]
    Decode(String),

    #[error("Timeout waiting for feed")]
    Timeout,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Swap form errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwapFormError {
    #[error("Token not found: {0}")]
    UnknownToken(String),

    #[error("Not a valid amount: {0:?}")]
    InvalidAmountInput(String),

    #[error("Select both tokens")]
    MissingToken,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Cannot swap {0} for itself")]
    SameToken(String),
}

/// Result type alias
pub type FeedResult<T> = Result<T, FeedError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type SwapFormResult<T> = Result<T, SwapFormError>;
