//! Command-line tools for an Elasticsearch KNN vector index.
//!
//! This crate backs three small binaries that each issue one request against
//! a conventional REST-style search-engine API:
//!
//! - `create-index`: deletes the target index if present (absence is not an
//!   error) and recreates it with a mapping read from disk
//! - `bulk-insert`: posts a newline-delimited JSON payload to the bulk API
//! - `knn-search`: runs a k-nearest-neighbor vector query
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Core data structures for API requests and responses
//! - **executor**: Executes HTTP requests using reqwest
//! - **config**: Flag/environment/default resolution and endpoint URLs
//! - **index**, **bulk**, **search**: Request construction for the three
//!   operations, one module per binary
//! - **error**: Caller-level error type shared by the binaries
//!
//! Each binary is a single linear sequence: parse configuration, build one
//! request, execute it, print the response body or a one-line diagnostic.

pub mod bulk;
pub mod config;
pub mod error;
pub mod executor;
pub mod index;
pub mod models;
pub mod search;
