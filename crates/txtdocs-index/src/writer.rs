//! Index writer for adding documents to the Tantivy index.

use std::{fs, path::Path};

use tantivy::{
    Index, IndexWriter as TantivyIndexWriter, TantivyDocument, TantivyError, Term,
    directory::MmapDirectory,
};
use tracing::debug;

use crate::{
    DocumentRecord, DocumentSink, analyzer::register_analyzers, error::IndexError,
    schema::IndexSchema,
};

/// Default heap size for the index writer (50 MB).
pub const DEFAULT_HEAP_SIZE: usize = 50_000_000;

/// Writes documents to a Tantivy index.
///
/// The writer opens or creates an index at the specified path and provides
/// methods to add, replace, and commit documents.
pub struct IndexWriter {
    /// The Tantivy index.
    index: Index,
    /// The underlying Tantivy writer.
    writer: TantivyIndexWriter,
    /// Schema with field handles.
    schema: IndexSchema,
}

impl IndexWriter {
    /// Opens or creates an index at the given path.
    ///
    /// `stemmer` selects the content analyzer language and must match the language used
    /// when searching.
    pub fn open(path: &Path, stemmer: &str, heap_size: usize) -> Result<Self, IndexError> {
        let schema = IndexSchema::new();

        fs::create_dir_all(path)?;

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::open_or_create(dir, schema.schema().clone())
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;
        register_analyzers(&index, stemmer)?;

        let writer = index
            .writer(heap_size)
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        Ok(Self {
            index,
            writer,
            schema,
        })
    }

    /// Creates an empty index at the given path, removing any index already there.
    ///
    /// Only an empty directory or an existing index is removed; anything else at
    /// `path` is left alone and reported as [`IndexError::NotAnIndex`].
    pub fn create(path: &Path, stemmer: &str, heap_size: usize) -> Result<Self, IndexError> {
        if path.exists() {
            if !is_replaceable(path)? {
                return Err(IndexError::NotAnIndex(path.to_path_buf()));
            }
            debug!(path = %path.display(), "removing existing index");
            fs::remove_dir_all(path)?;
        }
        Self::open(path, stemmer, heap_size)
    }

    /// Adds a document, replacing any document with the same id.
    ///
    /// The change is staged until [`commit`](Self::commit) is called.
    pub fn upsert(&mut self, record: &DocumentRecord) -> Result<(), IndexError> {
        self.writer
            .delete_term(Term::from_field_text(self.schema.path, &record.id));

        let mut doc = TantivyDocument::new();
        doc.add_text(self.schema.path, &record.id);
        doc.add_text(self.schema.name, &record.name);
        doc.add_text(self.schema.content, &record.content);

        self.writer
            .add_document(doc)
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Commits all pending changes to the index.
    ///
    /// This makes all added and deleted documents visible to readers.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        self.writer.commit().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Returns the number of documents in the index.
    ///
    /// Only committed changes are counted.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self
            .index
            .reader()
            .map_err(|e| IndexError::search(&e))?;
        Ok(reader.searcher().num_docs())
    }
}

/// Returns true if `path` is an empty directory or holds a Tantivy index.
fn is_replaceable(path: &Path) -> Result<bool, IndexError> {
    if !path.is_dir() {
        return Ok(false);
    }
    if fs::read_dir(path)?.next().is_none() {
        return Ok(true);
    }
    let dir = MmapDirectory::open(path).map_err(|e| {
        let err: TantivyError = e.into();
        IndexError::open_index(path.to_path_buf(), &err)
    })?;
    Index::exists(&dir).map_err(|e| {
        let err: TantivyError = e.into();
        IndexError::open_index(path.to_path_buf(), &err)
    })
}

impl DocumentSink for IndexWriter {
    fn submit(&mut self, record: &DocumentRecord) -> Result<(), IndexError> {
        self.upsert(record)
    }

    fn finish(&mut self) -> Result<u64, IndexError> {
        self.commit()?;
        let num_docs = self.num_docs()?;
        debug!(num_docs, "index committed");
        Ok(num_docs)
    }
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    fn record(id: &str, content: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            name: id.rsplit('/').next().unwrap_or(id).to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn creates_index_in_empty_directory() {
        let temp = TempDir::new().unwrap();
        let writer = IndexWriter::open(temp.path(), "italian", DEFAULT_HEAP_SIZE).unwrap();

        assert!(temp.path().join("meta.json").exists());
        drop(writer);
    }

    #[test]
    fn adds_and_commits_documents() {
        let temp = TempDir::new().unwrap();
        let mut writer = IndexWriter::open(temp.path(), "italian", DEFAULT_HEAP_SIZE).unwrap();

        writer.submit(&record("/docs/a.txt", "uno")).unwrap();
        writer.submit(&record("/docs/b.txt", "due")).unwrap();

        assert_eq!(writer.finish().unwrap(), 2);
    }

    #[test]
    fn resubmitting_an_id_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut writer = IndexWriter::open(temp.path(), "italian", DEFAULT_HEAP_SIZE).unwrap();

        writer.submit(&record("/docs/a.txt", "prima")).unwrap();
        writer.finish().unwrap();
        writer.submit(&record("/docs/a.txt", "dopo")).unwrap();

        assert_eq!(writer.finish().unwrap(), 1);
    }

    #[test]
    fn reopens_existing_index() {
        let temp = TempDir::new().unwrap();

        {
            let mut writer =
                IndexWriter::open(temp.path(), "italian", DEFAULT_HEAP_SIZE).unwrap();
            writer.submit(&record("/docs/a.txt", "uno")).unwrap();
            writer.finish().unwrap();
        }

        let writer = IndexWriter::open(temp.path(), "italian", DEFAULT_HEAP_SIZE).unwrap();
        assert_eq!(writer.num_docs().unwrap(), 1);
    }

    #[test]
    fn create_discards_existing_index() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index");

        {
            let mut writer = IndexWriter::create(&path, "italian", DEFAULT_HEAP_SIZE).unwrap();
            writer.submit(&record("/docs/a.txt", "uno")).unwrap();
            writer.finish().unwrap();
        }

        let writer = IndexWriter::create(&path, "italian", DEFAULT_HEAP_SIZE).unwrap();
        assert_eq!(writer.num_docs().unwrap(), 0);
    }

    #[test]
    fn create_reuses_empty_directory() {
        let temp = TempDir::new().unwrap();
        let writer = IndexWriter::create(temp.path(), "italian", DEFAULT_HEAP_SIZE).unwrap();

        assert_eq!(writer.num_docs().unwrap(), 0);
        assert!(temp.path().join("meta.json").exists());
    }

    #[test]
    fn create_refuses_directory_without_index() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.md"), "da non cancellare").unwrap();

        let result = IndexWriter::create(&path, "italian", DEFAULT_HEAP_SIZE);

        assert!(matches!(result, Err(IndexError::NotAnIndex(ref p)) if p == &path));
        assert!(path.join("keep.md").exists());
    }

    #[test]
    fn create_refuses_plain_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index");
        fs::write(&path, "not an index").unwrap();

        let result = IndexWriter::create(&path, "italian", DEFAULT_HEAP_SIZE);

        assert!(matches!(result, Err(IndexError::NotAnIndex(_))));
        assert!(path.is_file());
    }

    #[test]
    fn rejects_unknown_stemmer() {
        let temp = TempDir::new().unwrap();
        let result = IndexWriter::open(temp.path(), "klingon", DEFAULT_HEAP_SIZE);
        assert!(matches!(result, Err(IndexError::InvalidLanguage(_))));
    }
}
