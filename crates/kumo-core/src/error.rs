//! Error types for the kumo trading console.

use thiserror::Error;

/// Top-level error for a single evaluation cycle.
///
/// Every failure is terminal for the current invocation only; the caller
/// may re-invoke with new input.
#[derive(Error, Debug)]
pub enum KumoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} records, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Strategy evaluation errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Insufficient data: need {required} records, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Session gateway errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("No quote data available for {0}")]
    EmptyQuote(String),

    #[error("Malformed quote response: {0}")]
    MalformedQuote(String),
}

/// Offline data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available for the requested source")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Trade journal errors.
///
/// An append either writes one complete record or fails; there is no
/// retry and no buffering.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Journal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Journal encode error: {0}")]
    Encode(String),

    #[error("Journal decode error: {0}")]
    Decode(String),
}

/// Result type alias for kumo operations.
pub type KumoResult<T> = Result<T, KumoError>;
