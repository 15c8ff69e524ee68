//! Tantivy-based document index for txtdocs.
//!
//! This crate is the storage and execution backend behind the query language in
//! `txtdocs-query`. It handles:
//! - Discovery of `.txt` files and their ingestion as `(path, name, content)` documents
//! - Index creation and writing through the [`DocumentSink`] trait
//! - Compilation of [`Condition`](txtdocs_query::Condition) trees into Tantivy queries
//!   and their execution through the [`QueryBackend`] trait
//! - Text analysis for the `name` and `content` fields, with configurable stemming
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use txtdocs_index::{BuildOptions, QueryBackend, Searcher, build_index};
//! use txtdocs_query::compile_query;
//!
//! let index = Path::new(".txtdocs/index");
//! build_index(Path::new("./docs"), index, &BuildOptions::default()).unwrap();
//!
//! let searcher = Searcher::open(index, "italian").unwrap();
//! for hit in searcher.execute(&compile_query("name:guida"), 20).unwrap() {
//!     println!("{} {}", hit.name, hit.score);
//! }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod discovery;
mod document;
mod error;
mod indexer;
mod query;
mod schema;
mod search;
mod writer;

pub use analyzer::{CONTENT_TOKENIZER, FieldAnalyzers, NAME_TOKENIZER, parse_language};
pub use discovery::discover_text_files;
pub use document::{DocumentRecord, DocumentSink, QueryBackend, SearchHit};
pub use error::IndexError;
pub use indexer::{BuildOptions, IngestReport, build_index, ingest};
pub use query::QueryCompiler;
pub use schema::IndexSchema;
pub use search::Searcher;
pub use writer::{DEFAULT_HEAP_SIZE, IndexWriter};
