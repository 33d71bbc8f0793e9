//! Bulk-load documents from an NDJSON file into the target index.
//!
//! The payload is posted verbatim to `_bulk?refresh=true`; the server's
//! response body goes to stdout, diagnostics to stderr.

use clap::Parser;
use es_vector_tools::bulk;
use es_vector_tools::config::Connection;
use es_vector_tools::error::ToolError;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bulk-load documents from a newline-delimited JSON file.
#[derive(Parser, Debug)]
#[command(name = "bulk-insert", version, about)]
struct Args {
    /// Elasticsearch URL (default: env ES_URL or http://localhost:9200).
    #[arg(long)]
    es_url: Option<String>,

    /// Index name (default: env INDEX or items).
    #[arg(long)]
    index: Option<String>,

    /// Bulk NDJSON path.
    #[arg(long, default_value = "data/bulk.ndjson")]
    ndjson: PathBuf,
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
    let payload = bulk::load_ndjson(&args.ndjson)?;
    bulk::bulk_load(&conn, payload, REQUEST_TIMEOUT).await
}
