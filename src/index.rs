//! Index creation: read a mapping from disk, then delete-and-put the index.

use crate::config::Connection;
use crate::error::ToolError;
use crate::executor;
use crate::models::{ApiRequest, HttpMethod};
use log::info;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Reads and parses the mapping JSON document.
///
/// Fails fast with the offending path when the file is unreadable or does
/// not parse; nothing is sent to the server in that case.
pub fn load_mapping(path: &Path) -> Result<Value, ToolError> {
    let raw = fs::read(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| ToolError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates or replaces the target index with the given mapping.
///
/// First issues a best-effort DELETE against the index URL with 404 in the
/// ignore set — an absent index is not an error. Then issues a PUT with the
/// mapping as the JSON body. The DELETE-then-PUT sequence makes the
/// operation idempotent: running it twice with the same mapping succeeds
/// both times.
///
/// Returns the PUT response body; any PUT failure is fatal.
pub async fn recreate_index(
    conn: &Connection,
    mapping: &Value,
    timeout: Duration,
) -> Result<String, ToolError> {
    let url = conn.index_url();

    let mut delete = ApiRequest::new(HttpMethod::DELETE, url.clone());
    delete.set_timeout(timeout);
    executor::execute(&delete, &HashSet::from([404])).await?;
    info!("cleared index at {}", url);

    let mut put = ApiRequest::new(HttpMethod::PUT, url);
    put.set_body(mapping.to_string().into_bytes());
    put.set_content_type("application/json");
    put.set_timeout(timeout);
    let body = executor::execute(&put, &HashSet::new()).await?;
    info!("created index {}", conn.index);

    Ok(body)
}
