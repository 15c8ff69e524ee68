//! Full indexing pipeline.
//!
//! [`build_index`] rebuilds an index from scratch:
//! 1. Discover the `.txt` files directly inside the input directory
//! 2. Replace the index directory with an empty index
//! 3. Read each file into a [`DocumentRecord`] and submit it
//! 4. Commit and report counts and timing

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use tracing::{info, warn};

use crate::{
    DocumentRecord, DocumentSink, IndexError, IndexWriter, discover_text_files,
    writer::DEFAULT_HEAP_SIZE,
};

/// Settings for an index build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Stemmer language for the content analyzer.
    pub stemmer: String,
    /// Memory budget of the index writer in bytes.
    pub heap_size: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            stemmer: "italian".to_string(),
            heap_size: DEFAULT_HEAP_SIZE,
        }
    }
}

/// Outcome of an index build.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Number of documents in the index after the build.
    pub num_docs: u64,
    /// Wall-clock duration of the build in seconds.
    pub build_seconds: f64,
    /// Files that could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Rebuilds the index at `index_path` from the text files in `dir`.
///
/// Any existing index at `index_path` is deleted first. The input directory is checked
/// before anything is deleted, so a wrong path leaves the old index intact. An index
/// path that is the input directory or one of its ancestors is rejected.
pub fn build_index(
    dir: &Path,
    index_path: &Path,
    options: &BuildOptions,
) -> Result<IngestReport, IndexError> {
    let started = Instant::now();

    let files = discover_text_files(dir)?;
    info!(dir = %dir.display(), files = files.len(), "discovered text files");
    ensure_separate(dir, index_path)?;

    let mut writer = IndexWriter::create(index_path, &options.stemmer, options.heap_size)?;
    let skipped = ingest(&files, &mut writer)?;
    let num_docs = writer.finish()?;

    Ok(IngestReport {
        num_docs,
        build_seconds: started.elapsed().as_secs_f64(),
        skipped,
    })
}

/// Fails if replacing `index_path` would delete `dir`.
fn ensure_separate(dir: &Path, index_path: &Path) -> Result<(), IndexError> {
    if !index_path.exists() {
        return Ok(());
    }
    let input = dir.canonicalize()?;
    let index = index_path.canonicalize()?;
    if input.starts_with(&index) {
        return Err(IndexError::IndexOverlapsInput { index, input });
    }
    Ok(())
}

/// Reads each file and submits it to `sink`, returning the files that were skipped.
///
/// Unreadable files are logged and skipped; sink errors abort the batch.
pub fn ingest<S: DocumentSink>(
    files: &[PathBuf],
    sink: &mut S,
) -> Result<Vec<(PathBuf, String)>, IndexError> {
    let mut skipped = Vec::new();

    for path in files {
        match DocumentRecord::read(path) {
            Ok(record) => sink.submit(&record)?,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read file");
                skipped.push((path.clone(), e.to_string()));
            }
        }
    }

    Ok(skipped)
}
