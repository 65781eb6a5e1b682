use thiserror::Error;

use crate::http_client::HttpError;

/// Caller-input errors raised while configuring or finalizing a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("at least one symbol is required")]
    EmptySymbols,
    #[error("symbol cannot be blank")]
    BlankSymbol,
    #[error("duplicate symbol '{symbol}'")]
    DuplicateSymbol { symbol: String },
    #[error("duplicate field '{field}'")]
    DuplicateField { field: String },
}

/// Errors raised when reading fields from a [`crate::Security`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field '{field}' not found for symbol '{symbol}'")]
    NotFound { symbol: String, field: String },
    #[error("field '{field}' for symbol '{symbol}' holds {found}, expected {expected}")]
    TypeMismatch {
        symbol: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Failures surfaced by the transport or by the payload it returned.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport error: {0}")]
    Http(#[from] HttpError),

    #[error("quote service returned status {status}")]
    Status { status: u16, body: String },

    #[error("failed to decode quote payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("quote service error: {message}")]
    Service { message: String },
}

/// Invalid configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
}

/// Coarse error classification for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    FieldNotFound,
    FieldType,
    Transport,
    Config,
}

/// Top-level error type for quote operations.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl QuoteError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::Field(FieldError::NotFound { .. }) => ErrorKind::FieldNotFound,
            Self::Field(FieldError::TypeMismatch { .. }) => ErrorKind::FieldType,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<HttpError> for QuoteError {
    fn from(error: HttpError) -> Self {
        Self::Transport(TransportError::Http(error))
    }
}
