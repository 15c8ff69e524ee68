//! Document records and the collaborator traits of the index backend.
//!
//! The query layer and the ingestion pipeline only talk to the backend through
//! [`DocumentSink`] and [`QueryBackend`], so an alternative store can be dropped in
//! without touching them.

use std::{fs, path::Path};

use serde::Serialize;
use txtdocs_query::Condition;

use crate::IndexError;

/// A source file ready for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Document identifier: the absolute path of the file.
    pub id: String,
    /// File name including extension.
    pub name: String,
    /// Full file text.
    pub content: String,
}

impl DocumentRecord {
    /// Reads a file into a record.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected. The id is the path as
    /// given, so callers pass absolute paths.
    pub fn read(path: &Path) -> Result<Self, IndexError> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            id: path.to_string_lossy().into_owned(),
            name,
            content,
        })
    }
}

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// File name.
    pub name: String,
    /// Absolute path of the file.
    pub path: String,
    /// Relevance score assigned by the backend.
    pub score: f32,
}

/// Accepts documents for indexing.
pub trait DocumentSink {
    /// Stages a document. A record with an id already present replaces the old one.
    fn submit(&mut self, record: &DocumentRecord) -> Result<(), IndexError>;

    /// Commits all staged documents and returns the number of documents in the index.
    fn finish(&mut self) -> Result<u64, IndexError>;
}

/// Executes compiled conditions against a document store.
pub trait QueryBackend {
    /// Returns at most `limit` hits matching `condition`, best first.
    fn execute(&self, condition: &Condition, limit: usize) -> Result<Vec<SearchHit>, IndexError>;
}
