//! KNN search: build the `knn` query body and post it to the search API.

use crate::config::Connection;
use crate::error::ToolError;
use crate::executor;
use crate::models::{ApiRequest, HttpMethod};
use log::info;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Duration;

/// Hand-chosen demonstration query vector, pointing near the `shoes`
/// documents in `data/bulk.ndjson`. Stands in until a real input source for
/// query vectors is decided.
pub const EXAMPLE_QUERY_VECTOR: [f64; 3] = [0.9, 0.1, 0.0];

/// Name of the dense-vector field the sample mapping declares.
pub const VECTOR_FIELD: &str = "embedding";

/// A k-nearest-neighbor query clause.
///
/// Serializes to the `knn` object of a search request. The `filter` key is
/// omitted entirely when no category filter is set.
#[derive(Debug, Clone, Serialize)]
pub struct KnnQuery {
    field: String,
    query_vector: Vec<f64>,
    k: u32,
    num_candidates: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Vec<Value>>,
}

impl KnnQuery {
    /// Creates a query over `field` with the given vector and bounds.
    pub fn new(field: impl Into<String>, query_vector: Vec<f64>, k: u32, num_candidates: u32) -> Self {
        Self {
            field: field.into(),
            query_vector,
            k,
            num_candidates,
            filter: None,
        }
    }

    /// Restricts results to one category with a single term clause.
    ///
    /// An empty category means no filter, matching the CLI's
    /// `--category` default.
    pub fn with_category(mut self, category: &str) -> Self {
        if !category.is_empty() {
            self.filter = Some(vec![json!({ "term": { "category": category } })]);
        }
        self
    }

    /// Builds the full search request body.
    ///
    /// Restricts `_source` to the fields the tools display.
    pub fn to_body(&self) -> Value {
        json!({
            "knn": self,
            "_source": ["title", "category"],
        })
    }
}

/// Posts the query to `{base}/{index}/_search` and returns the raw response
/// text.
pub async fn run_search(
    conn: &Connection,
    query: &KnnQuery,
    timeout: Duration,
) -> Result<String, ToolError> {
    let mut request = ApiRequest::new(HttpMethod::POST, conn.search_url());
    request.set_body(query.to_body().to_string().into_bytes());
    request.set_content_type("application/json");
    request.set_timeout(timeout);

    let body = executor::execute(&request, &HashSet::new()).await?;
    info!("search against {} returned {} bytes", conn.index, body.len());

    Ok(body)
}
