/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Every failure mode of a check is a distinct variant; nothing is retried
/// or recovered internally.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure while sending the request or reading the response
    Network(reqwest::Error),
    /// Failure while serializing a payload or deserializing the envelope
    Json(serde_json::Error),
    /// The service answered with a non-success HTTP status
    Unexpected(StatusCode),
    /// The envelope code was not the success code
    UnexpectedCode {
        /// Code reported by the service
        code: i64,
        /// Message reported by the service
        msg: String,
    },
    /// The envelope `data` field was not a boolean
    UnexpectedDataType(String),
    /// Caller-side validation failure
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected http status: {status}"),
            AppError::UnexpectedCode { code, msg } => {
                write!(f, "unexpected response code: {code}, message: {msg}")
            }
            AppError::UnexpectedDataType(kind) => {
                write!(f, "unexpected data type in response: {kind}")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
