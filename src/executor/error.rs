//! HTTP request execution error types.
//!
//! Every failure the executor can produce carries enough context for a
//! one-line diagnostic: the method and URL of the attempted request, the
//! HTTP status when one was received, and the underlying cause.

use crate::models::HttpMethod;
use std::fmt;

/// Errors that can occur during HTTP request execution.
#[derive(Debug)]
pub enum RequestError {
    /// Network error occurred during request execution.
    ///
    /// This includes DNS resolution failures, refused connections, and
    /// connections dropped mid-transfer. No HTTP status was received.
    Network {
        method: HttpMethod,
        url: String,
        detail: String,
    },

    /// Request timed out before completion.
    Timeout { method: HttpMethod, url: String },

    /// The server replied with a status outside the accepted set.
    ///
    /// Carries the response body, decoded permissively, for diagnostics.
    UnexpectedStatus {
        method: HttpMethod,
        url: String,
        status: u16,
        body: String,
    },

    /// A 2xx response body was not valid UTF-8.
    InvalidBody {
        method: HttpMethod,
        url: String,
        detail: String,
    },

    /// Invalid URL provided in the request.
    ///
    /// The URL could not be parsed or is malformed.
    InvalidUrl(String),

    /// URL scheme other than HTTP or HTTPS.
    UnsupportedProtocol(String),

    /// Client construction or request assembly failed before any network
    /// activity, including a rejected non-positive timeout.
    Build(String),
}

impl RequestError {
    /// The HTTP status code associated with this failure, when one was
    /// received from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network {
                method,
                url,
                detail,
            } => {
                write!(f, "request failed: {} {}: {}", method, url, detail)
            }
            RequestError::Timeout { method, url } => {
                write!(f, "request failed: {} {}: timed out", method, url)
            }
            RequestError::UnexpectedStatus {
                method,
                url,
                status,
                body,
            } => {
                write!(
                    f,
                    "http error: {} {}: status={} body={}",
                    method, url, status, body
                )
            }
            RequestError::InvalidBody {
                method,
                url,
                detail,
            } => {
                write!(f, "invalid utf-8 in response: {} {}: {}", method, url, detail)
            }
            RequestError::InvalidUrl(url) => write!(f, "invalid url: {}", url),
            RequestError::UnsupportedProtocol(scheme) => {
                write!(f, "unsupported protocol: {}", scheme)
            }
            RequestError::Build(msg) => write!(f, "failed to build request: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Convert URL parsing errors to RequestError.
impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}
