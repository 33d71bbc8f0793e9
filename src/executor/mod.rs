//! HTTP request executor.
//!
//! One request in, one typed outcome out. `send` is the transport layer: it
//! validates the request, performs a single reqwest round trip, and returns
//! the status code and raw body. `execute` layers the outcome contract on
//! top: 2xx responses decode to text, statuses listed in `ignore_statuses`
//! collapse to an empty success, anything else is a typed failure carrying
//! the server's body.
//!
//! The executor performs exactly one network round trip per call. There is
//! no retry, no cache, and no shared state; the request's timeout bounds the
//! whole call, so it never blocks indefinitely.

pub mod error;

pub use error::RequestError;

use crate::models::{ApiRequest, ApiResponse, HttpMethod};
use log::debug;
use std::collections::HashSet;

/// Executes an HTTP request and returns the raw response.
///
/// Validates the URL and timeout, opens a connection, sends the request with
/// the given method/body/content-type, and waits up to the request's timeout
/// for the full response. Any status code counts as a delivered response
/// here; interpreting it is `execute`'s job.
///
/// # Errors
///
/// Returns `RequestError` when the URL is malformed or non-HTTP, the timeout
/// is not positive, the connection cannot be established, or the response
/// does not arrive in time. None of these carry an HTTP status.
pub async fn send(request: &ApiRequest) -> Result<ApiResponse, RequestError> {
    validate_url(&request.url)?;

    if request.timeout.is_zero() {
        return Err(RequestError::Build(
            "timeout must be a positive duration".to_string(),
        ));
    }

    let method = match request.method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
    };

    let client = reqwest::Client::builder()
        .timeout(request.timeout)
        .build()
        .map_err(|e| RequestError::Build(e.to_string()))?;

    let mut req_builder = client.request(method, &request.url);

    if let Some(content_type) = &request.content_type {
        req_builder = req_builder.header(reqwest::header::CONTENT_TYPE, content_type.as_str());
    }

    // A request without a body sends none at all; DELETE relies on this.
    if let Some(body) = &request.body {
        req_builder = req_builder.body(body.clone());
    }

    debug!("sending {} {}", request.method, request.url);

    let response = req_builder
        .send()
        .await
        .map_err(|e| classify_send_error(e, request))?;

    let status_code = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| RequestError::Network {
            method: request.method,
            url: request.url.clone(),
            detail: e.to_string(),
        })?
        .to_vec();

    debug!(
        "received status={} body_len={} for {} {}",
        status_code,
        body.len(),
        request.method,
        request.url
    );

    Ok(ApiResponse::new(status_code, body))
}

/// Executes an HTTP request and applies the outcome contract.
///
/// On a 2xx status, decodes the response body as UTF-8 text and returns it.
/// On a non-2xx status listed in `ignore_statuses`, returns an empty string:
/// the operation had no effect, which the caller does not treat as an error.
/// On any other non-2xx status, returns a failure carrying the status code
/// and the response body decoded permissively.
///
/// `ignore_statuses` is an explicit set so the suppression policy stays
/// visible at every call site and testable on its own; the only current use
/// is treating 404 as a no-op when deleting an index that may not exist.
pub async fn execute(
    request: &ApiRequest,
    ignore_statuses: &HashSet<u16>,
) -> Result<String, RequestError> {
    let response = send(request).await?;

    if response.is_success() {
        return response
            .body_as_string()
            .map_err(|e| RequestError::InvalidBody {
                method: request.method,
                url: request.url.clone(),
                detail: e.to_string(),
            });
    }

    if ignore_statuses.contains(&response.status_code) {
        debug!(
            "ignoring status={} for {} {}",
            response.status_code, request.method, request.url
        );
        return Ok(String::new());
    }

    Err(RequestError::UnexpectedStatus {
        method: request.method,
        url: request.url.clone(),
        status: response.status_code,
        body: response.body_lossy(),
    })
}

/// Maps a reqwest send failure to a typed error with request context.
fn classify_send_error(err: reqwest::Error, request: &ApiRequest) -> RequestError {
    if err.is_timeout() {
        RequestError::Timeout {
            method: request.method,
            url: request.url.clone(),
        }
    } else if err.is_connect() {
        RequestError::Network {
            method: request.method,
            url: request.url.clone(),
            detail: format!("connection failed: {}", err),
        }
    } else if err.is_builder() {
        RequestError::Build(err.to_string())
    } else {
        RequestError::Network {
            method: request.method,
            url: request.url.clone(),
            detail: err.to_string(),
        }
    }
}

/// Validates that the URL is well-formed and uses a supported protocol.
fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(scheme.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validate_url_valid_http() {
        assert!(validate_url("http://localhost:9200").is_ok());
        assert!(validate_url("http://localhost:9200/items/_search").is_ok());
        assert!(validate_url("http://127.0.0.1:9200").is_ok());
    }

    #[test]
    fn test_validate_url_valid_https() {
        assert!(validate_url("https://search.example.com").is_ok());
        assert!(validate_url("https://search.example.com/items/_bulk?refresh=true").is_ok());
    }

    #[test]
    fn test_validate_url_invalid() {
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("").is_err());
        assert!(validate_url("://missing-scheme").is_err());
    }

    #[test]
    fn test_validate_url_unsupported_protocol() {
        let result = validate_url("ftp://example.com");
        match result {
            Err(RequestError::UnsupportedProtocol(scheme)) => {
                assert_eq!(scheme, "ftp");
            }
            other => panic!("expected UnsupportedProtocol error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_rejects_zero_timeout() {
        let mut request = ApiRequest::new(HttpMethod::GET, "http://localhost:9200".to_string());
        request.set_timeout(Duration::ZERO);

        let result = send(&request).await;
        match result {
            Err(RequestError::Build(msg)) => {
                assert!(msg.contains("timeout"));
            }
            other => panic!("expected Build error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_rejects_malformed_url() {
        let request = ApiRequest::new(HttpMethod::GET, "not a url".to_string());

        let result = execute(&request, &HashSet::new()).await;
        assert!(matches!(result, Err(RequestError::InvalidUrl(_))));
    }
}
