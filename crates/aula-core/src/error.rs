//! Error types for the aula client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, provider-reported, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for backend operations.
///
/// Covers every failure mode the client can observe, with explicit
/// variants so callers can handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A fault reported by the backend service.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (collection names, config fields).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A fault reported by the backend in a response body.
///
/// Authentication faults carry a short `code` string (for example
/// `"wrong-password"`); faults from other endpoints may carry only a
/// message.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Provider fault code, if present.
    pub code: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Create an error carrying only a fault code.
    pub fn coded(status: u16, code: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid collection name.
    #[error("invalid collection '{value}': {reason}")]
    Collection { value: String, reason: String },

    /// Invalid or incomplete client configuration.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
