//! Error types for the market client

use std::fmt;

use serde_json::Value;

/// Unified error type for market client operations
#[derive(Debug)]
pub enum MarketError {
    /// HTTP request failed (network error, timeout, body decode, etc.)
    Network(reqwest::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// API payload is missing a required field or has the wrong shape
    Parse(String),
    /// The requested item could not be found or priced
    IncorrectHashName {
        hash_name: String,
        /// Raw API response, when one was received
        response: Option<Value>,
    },
    /// Cache file I/O failed
    Io(std::io::Error),
    /// Cache file contents are not valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketError::Network(e) => write!(f, "Network error: {}", e),
            MarketError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            MarketError::Parse(detail) => write!(f, "Parse error: {}", detail),
            MarketError::IncorrectHashName { hash_name, .. } => {
                write!(f, "Incorrect hash name: {}", hash_name)
            }
            MarketError::Io(e) => write!(f, "Cache I/O error: {}", e),
            MarketError::Json(e) => write!(f, "Cache JSON error: {}", e),
        }
    }
}

impl std::error::Error for MarketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarketError::Network(e) => Some(e),
            MarketError::HttpStatus(_) => None,
            MarketError::Parse(_) => None,
            MarketError::IncorrectHashName { .. } => None,
            MarketError::Io(e) => Some(e),
            MarketError::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for MarketError {
    fn from(err: reqwest::Error) -> Self {
        MarketError::Network(err)
    }
}

impl From<std::io::Error> for MarketError {
    fn from(err: std::io::Error) -> Self {
        MarketError::Io(err)
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::Json(err)
    }
}

/// Result alias for market client operations
pub type Result<T> = std::result::Result<T, MarketError>;
