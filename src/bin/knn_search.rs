//! Run a k-nearest-neighbor query against the target index.
//!
//! Uses the fixed demonstration query vector; `--category` adds a term
//! filter when non-empty. The raw search response goes to stdout,
//! diagnostics to stderr.

use clap::Parser;
use es_vector_tools::config::Connection;
use es_vector_tools::error::ToolError;
use es_vector_tools::search::{self, KnnQuery, EXAMPLE_QUERY_VECTOR, VECTOR_FIELD};
use std::process::ExitCode;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Run a KNN vector search.
#[derive(Parser, Debug)]
#[command(name = "knn-search", version, about)]
struct Args {
    /// Elasticsearch URL (default: env ES_URL or http://localhost:9200).
    #[arg(long)]
    es_url: Option<String>,

    /// Index name (default: env INDEX or items).
    #[arg(long)]
    index: Option<String>,

    /// Number of results to return.
    #[arg(short, default_value_t = 3)]
    k: u32,

    /// Number of candidates examined per shard.
    #[arg(long, default_value_t = 20)]
    num_candidates: u32,

    /// Optional category filter; empty means no filter.
    #[arg(long, default_value = "")]
    category: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(body) => {
            println!("{}", body);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, ToolError> {
    let conn = Connection::resolve(args.es_url.as_deref(), args.index.as_deref());
    let query = KnnQuery::new(
        VECTOR_FIELD,
        EXAMPLE_QUERY_VECTOR.to_vec(),
        args.k,
        args.num_candidates,
    )
    .with_category(&args.category);

    search::run_search(&conn, &query, REQUEST_TIMEOUT).await
}
