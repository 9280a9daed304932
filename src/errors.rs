use thiserror::Error;

use crate::types::StatusCode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{0} not found. Set it in .env file or environment variable.")]
    Missing(&'static str),
    #[error("Please replace placeholder value of {0} with your actual Testnet credential")]
    Placeholder(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Symbol cannot be empty")]
    EmptySymbol,
    #[error("Symbol must be uppercase alphanumeric (e.g. BTCUSDT), got: {0}")]
    InvalidSymbol(String),
    #[error("Side must be 'BUY' or 'SELL', got: {0}")]
    InvalidSide(String),
    #[error("Quantity must be a decimal number, got: {0}")]
    InvalidQuantity(String),
    #[error("Quantity must be positive, got: {0}")]
    NonPositiveQuantity(String),
    #[error("--price is required for limit orders")]
    MissingPrice,
    #[error("Price must be a decimal number, got: {0}")]
    InvalidPrice(String),
    #[error("Price must be positive, got: {0}")]
    NonPositivePrice(String),
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to build request: {0}")]
    Request(#[from] isahc::http::Error),
    #[error("network error: {0}")]
    Transport(#[from] isahc::Error),
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("Binance API error (HTTP {status}, code {code}): {msg}")]
    Api { status: u16, code: i64, msg: String },
    #[error("unexpected HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration Error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Order Error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Order Error: {0}")]
    Execution(#[from] ExecutionError),
    #[error("Cancelled by user")]
    UserAbort,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Configuration(_) => StatusCode::ErrorConfiguration,
            Error::Validation(_) => StatusCode::ErrorValidation,
            Error::Execution(_) => StatusCode::ErrorExecution,
            Error::UserAbort => StatusCode::Success,
            Error::Io(_) => StatusCode::ErrorGeneric,
        }
    }
}
