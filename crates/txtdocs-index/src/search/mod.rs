//! Search execution over a built index.

use std::{path::Path, time::Instant};

use tantivy::{
    Index, TantivyDocument,
    collector::TopDocs,
    directory::MmapDirectory,
    schema::{Field as TantivyField, Value},
};
use tracing::debug;
use txtdocs_query::Condition;

use crate::{
    IndexError, QueryBackend, SearchHit,
    analyzer::{FieldAnalyzers, register_analyzers},
    query::QueryCompiler,
    schema::IndexSchema,
};

/// Read-only handle on an index that executes compiled conditions.
pub struct Searcher {
    /// The Tantivy index.
    index: Index,
    /// Schema with field handles.
    schema: IndexSchema,
    /// Query-side analyzers, matching the ones the index was built with.
    analyzers: FieldAnalyzers,
}

impl Searcher {
    /// Opens an existing index for searching.
    ///
    /// `stemmer` must be the language the index was built with.
    pub fn open(path: &Path, stemmer: &str) -> Result<Self, IndexError> {
        if !path.is_dir() {
            return Err(IndexError::IndexMissing {
                path: path.to_path_buf(),
            });
        }

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let exists = Index::exists(&dir).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;
        if !exists {
            return Err(IndexError::IndexMissing {
                path: path.to_path_buf(),
            });
        }

        let index = Index::open(dir).map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;
        register_analyzers(&index, stemmer)?;
        let analyzers = FieldAnalyzers::new(stemmer)?;

        Ok(Self {
            index,
            schema: IndexSchema::new(),
            analyzers,
        })
    }

    /// Returns the number of documents in the index.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self.index.reader().map_err(|e| IndexError::search(&e))?;
        Ok(reader.searcher().num_docs())
    }

    /// Reads a stored text field, returning an empty string if missing.
    fn get_text_field(doc: &TantivyDocument, field: TantivyField) -> String {
        doc.get_first(field)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    }
}

impl QueryBackend for Searcher {
    fn execute(&self, condition: &Condition, limit: usize) -> Result<Vec<SearchHit>, IndexError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let mut compiler = QueryCompiler::new(&self.schema, self.analyzers.clone());
        let query = compiler.compile(condition);

        let reader = self.index.reader().map_err(|e| IndexError::search(&e))?;
        let searcher = reader.searcher();
        let top_docs = searcher
            .search(query.as_ref(), &TopDocs::with_limit(limit))
            .map_err(|e| IndexError::search(&e))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| IndexError::search(&e))?;
            hits.push(SearchHit {
                name: Self::get_text_field(&doc, self.schema.name),
                path: Self::get_text_field(&doc, self.schema.path),
                score,
            });
        }

        debug!(
            hits = hits.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "query executed"
        );
        Ok(hits)
    }
}
