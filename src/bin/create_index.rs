//! Create (or replace) the target index with a mapping read from disk.
//!
//! The index is deleted first with 404 treated as a no-op, so the command
//! succeeds whether or not the index already exists. The PUT response body
//! goes to stdout; diagnostics go to stderr.

use clap::Parser;
use es_vector_tools::config::Connection;
use es_vector_tools::error::ToolError;
use es_vector_tools::index;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create or replace a search index with a mapping.
#[derive(Parser, Debug)]
#[command(name = "create-index", version, about)]
struct Args {
    /// Elasticsearch URL (default: env ES_URL or http://localhost:9200).
    #[arg(long)]
    es_url: Option<String>,

    /// Index name (default: env INDEX or items).
    #[arg(long)]
    index: Option<String>,

    /// Mapping JSON path.
    #[arg(long, default_value = "data/index.json")]
    mapping: PathBuf,
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
    let mapping = index::load_mapping(&args.mapping)?;
    index::recreate_index(&conn, &mapping, REQUEST_TIMEOUT).await
}
