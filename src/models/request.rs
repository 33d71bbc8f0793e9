//! API request data model.
//!
//! This module defines the request value handed to the executor: a method,
//! an absolute URL, an optional raw-byte body, an optional content type, and
//! the timeout bounding the whole round trip.

use std::time::Duration;

/// Default bound on a single request round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP request method.
///
/// Only the methods the search-engine wire protocol uses are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to an endpoint
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single API request, immutable once handed to the executor.
///
/// Created fresh per invocation and discarded after use. The body is
/// `Option<Vec<u8>>` rather than an empty buffer so that requests without a
/// body (DELETE in particular) send none at all.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method (GET, POST, PUT, DELETE).
    pub method: HttpMethod,

    /// Absolute target URL for the request.
    pub url: String,

    /// Optional raw request body.
    ///
    /// `None` means no body is transmitted; the distinction from an empty
    /// body matters for DELETE requests.
    pub body: Option<Vec<u8>>,

    /// Optional Content-Type header value.
    ///
    /// When `None`, no content-type header is sent.
    pub content_type: Option<String>,

    /// Maximum time the whole round trip may take.
    ///
    /// Must be positive; the executor rejects a zero timeout.
    pub timeout: Duration,
}

impl ApiRequest {
    /// Creates a new bodyless request with the default timeout.
    pub fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            body: None,
            content_type: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = Some(body);
    }

    /// Sets the Content-Type header value.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    /// Sets the request timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Checks if the request has a body.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}
