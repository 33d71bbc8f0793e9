//! Bulk loading: post a newline-delimited JSON payload to the bulk API.

use crate::config::Connection;
use crate::error::ToolError;
use crate::executor;
use crate::models::{ApiRequest, HttpMethod};
use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Reads the NDJSON payload as raw bytes.
///
/// The payload is forwarded verbatim — lines alternate action metadata and
/// document source per the bulk-API convention, and the server is the one
/// that validates them.
pub fn load_ndjson(path: &Path) -> Result<Vec<u8>, ToolError> {
    fs::read(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Posts the payload to `{base}/{index}/_bulk?refresh=true`.
///
/// Returns the server's response body, which reports per-action results and
/// an overall `errors` flag.
pub async fn bulk_load(
    conn: &Connection,
    payload: Vec<u8>,
    timeout: Duration,
) -> Result<String, ToolError> {
    let payload_len = payload.len();
    let mut request = ApiRequest::new(HttpMethod::POST, conn.bulk_url());
    request.set_body(payload);
    request.set_content_type("application/x-ndjson");
    request.set_timeout(timeout);

    let body = executor::execute(&request, &HashSet::new()).await?;
    info!("bulk loaded {} bytes into {}", payload_len, conn.index);

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_ndjson_valid() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, r#"{{"index":{{"_id":"1"}}}}"#).expect("failed to write");
        writeln!(file, r#"{{"title":"Red running shoes"}}"#).expect("failed to write");

        let payload = load_ndjson(file.path()).expect("payload should load");
        let text = String::from_utf8(payload).expect("payload is utf-8");
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_load_ndjson_missing_file() {
        let result = load_ndjson(Path::new("data/does-not-exist.ndjson"));
        match result {
            Err(ToolError::Io { path, .. }) => {
                assert_eq!(path, Path::new("data/does-not-exist.ndjson"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
