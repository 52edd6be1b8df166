//! Error types for the option payoff chart library.

use thiserror::Error;

/// Result type alias using the library's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while computing payoffs or building and rendering charts.
#[derive(Debug, Error)]
pub enum Error {
    /// The option style is neither a call nor a put.
    #[error("invalid option type '{0}': expected 'Call' or 'Put'")]
    InvalidOptionType(String),

    /// The position is neither a buy nor a sell.
    #[error("invalid position '{0}': expected 'Buy' or 'Sell'")]
    InvalidPosition(String),

    /// Chart configuration rejected during validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Chart data could not be serialized for the renderer.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The rendered chart could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidOptionType`] from the rejected input.
    #[must_use]
    pub fn invalid_option_type(value: impl Into<String>) -> Self {
        Self::InvalidOptionType(value.into())
    }

    /// Creates an [`Error::InvalidPosition`] from the rejected input.
    #[must_use]
    pub fn invalid_position(value: impl Into<String>) -> Self {
        Self::InvalidPosition(value.into())
    }

    /// Creates an [`Error::InvalidConfig`] with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
