//! Caller-level error type shared by the binaries.
//!
//! Two kinds of failure reach a binary's `main`: a local input problem (file
//! unreadable, mapping not valid JSON) or a remote request problem from the
//! executor. Both end the same way — a one-line diagnostic on stderr and
//! exit code 1 — so they share one enum the binaries can print directly.

use crate::executor::RequestError;
use std::fmt;
use std::path::PathBuf;

/// An error from one of the command-line operations.
#[derive(Debug)]
pub enum ToolError {
    /// A local input file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A local input file was not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The remote request failed.
    Request(RequestError),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ToolError::Json { path, source } => {
                write!(f, "invalid json in {}: {}", path.display(), source)
            }
            ToolError::Request(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::Io { source, .. } => Some(source),
            ToolError::Json { source, .. } => Some(source),
            ToolError::Request(err) => Some(err),
        }
    }
}

impl From<RequestError> for ToolError {
    fn from(err: RequestError) -> Self {
        ToolError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    #[test]
    fn test_io_error_display() {
        let err = ToolError::Io {
            path: PathBuf::from("data/bulk.ndjson"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            format!("{}", err),
            "failed to read data/bulk.ndjson: no such file"
        );
    }

    #[test]
    fn test_request_error_passes_through() {
        let err = ToolError::from(RequestError::Timeout {
            method: HttpMethod::POST,
            url: "http://localhost:9200/items/_search".to_string(),
        });
        assert_eq!(
            format!("{}", err),
            "request failed: POST http://localhost:9200/items/_search: timed out"
        );
    }
}
